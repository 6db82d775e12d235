pub mod root; // `GET /`
pub mod work; // `GET /work`
pub mod fallback; // `NOT_FOUND`

#[cfg(test)]
pub(crate) mod capture;
