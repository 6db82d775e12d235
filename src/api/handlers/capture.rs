use std::fmt;
use std::sync::{Arc, Mutex};

use tracing::{
    field::{Field, Visit},
    subscriber::DefaultGuard,
    Event,
    Level,
    Subscriber,
};
use tracing_subscriber::{
    layer::{Context, SubscriberExt},
    Layer,
    Registry,
};

/// 收集当前线程记录的日志，测试handler的日志输出
#[derive(Clone, Default)]
pub struct Captured(Arc<Mutex<Vec<(Level, String)>>>);

impl Captured {
    /// 在当前线程设置subscriber，guard drop后恢复
    pub fn install(&self) -> DefaultGuard {
        tracing::subscriber::set_default(Registry::default().with(self.clone()))
    }

    pub fn messages(&self, level: Level) -> Vec<String> {
        self.0.lock().unwrap()
            .iter()
            .filter(|(l, _)| *l == level)
            .map(|(_, m)| m.clone())
            .collect()
    }
}

struct Message(String);

impl Visit for Message {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{:?}", value);
        }
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        let mut msg = Message(String::new());
        event.record(&mut msg);
        self.0.lock().unwrap().push((*event.metadata().level(), msg.0));
    }
}
