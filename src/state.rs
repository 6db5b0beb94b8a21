use crate::config::AppConfig;
use crate::services::cal::SchedulingApi;
use crate::services::completion::CompletionProvider;

pub struct AppState {
    pub config: AppConfig,
    pub cal: Box<dyn SchedulingApi>,
    pub llm: Box<dyn CompletionProvider>,
}
