//! 토픽 레지스트리 포트 구현 어댑터.

use anyhow::Result;

use crate::application::ports::TopicRegistry;
use crate::domain::topic::Topic;

/// 실행 시 전달된 토픽 목록을 그대로 제공한다(`--topic NAME=SCHEMA`).
#[derive(Debug, Clone, Default)]
pub struct StaticTopicRegistry {
    topics: Vec<Topic>,
}

impl StaticTopicRegistry {
    pub fn new(topics: Vec<Topic>) -> Self {
        Self { topics }
    }
}

impl TopicRegistry for StaticTopicRegistry {
    fn topics(&self) -> Result<Vec<Topic>> {
        Ok(self.topics.clone())
    }
}
