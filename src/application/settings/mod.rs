//! 설정 트리 리듀서/빌더.
//! 둘 다 I/O 없는 순수 함수이며, 호스트 이벤트마다 동기적으로 호출된다.

mod builder;
mod path;
mod reducer;

pub use builder::{
    GROUP_PARAMETERS, GROUP_SERVICES, GROUP_TOPICS, build_settings_tree,
    mode_schedule_topic_options,
};
pub use path::{ConfigField, ScheduleField, UpdateRejected};
pub use reducer::{reduce, try_reduce};
