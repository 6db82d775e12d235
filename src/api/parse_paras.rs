use std::net::Ipv4Addr;

use argh::FromArgs;

/// error: 定义的错误类型，用于错误传递
use crate::api::error::DemoError;

#[derive(FromArgs)]
/// backend behind the nginx reverse-proxy demo
struct Paras {
    /// ip address, default: 0.0.0.0
    #[argh(option, short = 'a')]
    addr: Option<String>,

    /// port, default: 8080
    #[argh(option, short = 'p')]
    port: Option<u16>,

    /// name used in responses and logs, default: springboot-nginx-demo
    #[argh(option, short = 'n')]
    name: Option<String>,
}

/// 存储解析后的命令行参数
#[derive(Debug)]
pub struct ParsedParas {
    pub addr:     Ipv4Addr, // 要监听的地址，默认0.0.0.0
    pub addr_str: String,   // 要监听的地址，默认0.0.0.0，用于日志
    pub port:     u16,      // 要监听的端口，默认8080
    pub name:     String,   // 返回内容和日志中使用的名称，默认springboot-nginx-demo
}

/// 解析参数
pub fn parse_para() -> Result<ParsedParas, DemoError> {
    let para: Paras = argh::from_env();
    check_para(para)
}

/// 检查参数并填充默认值
fn check_para(para: Paras) -> Result<ParsedParas, DemoError> {
    let addr_str = match para.addr {
        Some(a) => a,
        None => "0.0.0.0".to_string(),
    };
    let name = match para.name {
        Some(n) => {
            if n.trim().is_empty() {
                return Err(DemoError::ParaError{para: "-n name can not be empty".to_string()})
            }
            n
        },
        None => "springboot-nginx-demo".to_string(),
    };
    Ok(ParsedParas{
        addr: get_addr(&addr_str)?,
        addr_str,
        port: para.port.unwrap_or(8080),
        name,
    })
}

/// 解析开启服务的ip地址，格式为`x.x.x.x`，例如：127.0.0.1
fn get_addr(addr: &str) -> Result<Ipv4Addr, DemoError> {
    match addr.parse::<Ipv4Addr>() {
        Ok(a) => Ok(a),
        Err(e) => Err(DemoError::ParaError{para: format!("-a ip address must be x.x.x.x format, not {}: {}", addr, e)}),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<ParsedParas, DemoError> {
        let para = Paras::from_args(&["nginx-demo"], args).expect("argh rejected args");
        check_para(para)
    }

    #[test]
    fn defaults_match_the_springboot_backend() {
        let p = parse(&[]).unwrap();
        assert_eq!(p.addr, Ipv4Addr::UNSPECIFIED);
        assert_eq!(p.addr_str, "0.0.0.0");
        assert_eq!(p.port, 8080);
        assert_eq!(p.name, "springboot-nginx-demo");
    }

    #[test]
    fn short_flags_override_defaults() {
        let p = parse(&["-a", "127.0.0.1", "-p", "9000", "-n", "laravel-nginx-demo"]).unwrap();
        assert_eq!(p.addr, Ipv4Addr::LOCALHOST);
        assert_eq!(p.port, 9000);
        assert_eq!(p.name, "laravel-nginx-demo");
    }

    #[test]
    fn address_needs_four_parts() {
        let err = parse(&["--addr", "127.0.1"]).unwrap_err();
        assert!(matches!(err, DemoError::ParaError{..}));
    }

    #[test]
    fn address_parts_must_fit_u8() {
        let err = parse(&["--addr", "10.0.0.256"]).unwrap_err();
        match err {
            DemoError::ParaError{para} => assert!(para.contains("10.0.0.256"), "{}", para),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn hostnames_are_not_addresses() {
        let err = parse(&["--addr", "localhost"]).unwrap_err();
        assert!(matches!(err, DemoError::ParaError{..}));
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = parse(&["--name", "  "]).unwrap_err();
        assert!(matches!(err, DemoError::ParaError{..}));
    }
}
