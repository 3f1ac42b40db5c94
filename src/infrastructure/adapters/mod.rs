//! 애플리케이션 포트를 실제 인프라 구현체로 연결하는 어댑터 계층.

mod reporter;
mod robot_gateway;
mod state_store;
mod topic_registry;

pub use reporter::ConsoleReporter;
pub use robot_gateway::JsonLinesGateway;
pub use state_store::JsonStateStore;
pub use topic_registry::StaticTopicRegistry;
