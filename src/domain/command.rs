//! 빈 요청으로 호출되는 로봇 서비스 명령.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceCommand {
    StandUp,
    LayDown,
    ResetSimulation,
}

impl ServiceCommand {
    pub fn label(self) -> &'static str {
        match self {
            Self::StandUp => "Stand up",
            Self::LayDown => "Lay down",
            Self::ResetSimulation => "Reset simulation",
        }
    }
}
