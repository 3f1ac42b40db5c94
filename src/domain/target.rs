//! 운영자가 조정하는 보행 목표값(무게중심 높이, 이동/회전 속도).

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TargetError {
    #[error("{target} must be a finite number, got {value}")]
    NotFinite { target: &'static str, value: f64 },
    #[error("{target} must be within {min}..={max} {unit}, got {value}")]
    OutOfRange {
        target: &'static str,
        value: f64,
        min: f64,
        max: f64,
        unit: &'static str,
    },
}

/// 파라미터로 전달되는 목표값 종류.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocomotionTarget {
    ComHeight,
    DisplacementVelocity,
    RotationVelocity,
}

impl LocomotionTarget {
    pub const ALL: [Self; 3] = [
        Self::ComHeight,
        Self::DisplacementVelocity,
        Self::RotationVelocity,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::ComHeight => "COM height",
            Self::DisplacementVelocity => "Target displacement velocity",
            Self::RotationVelocity => "Target rotation velocity",
        }
    }

    pub fn unit(self) -> &'static str {
        match self {
            Self::ComHeight => "m",
            Self::DisplacementVelocity => "m/s",
            Self::RotationVelocity => "rad/s",
        }
    }

    /// 입력 위젯이 허용하는 범위(양끝 포함).
    pub fn bounds(self) -> (f64, f64) {
        match self {
            Self::ComHeight => (0.0, 2.0),
            Self::DisplacementVelocity | Self::RotationVelocity => (0.0, f64::INFINITY),
        }
    }

    /// 입력 위젯 증감 단위.
    pub fn step(self) -> f64 {
        match self {
            Self::ComHeight => 0.01,
            Self::DisplacementVelocity | Self::RotationVelocity => 0.1,
        }
    }

    /// 입력 위젯 초기 표시값.
    pub fn initial_value(self) -> f64 {
        match self {
            Self::ComHeight => 0.3,
            Self::DisplacementVelocity => 0.2,
            Self::RotationVelocity => 1.0,
        }
    }

    /// 파라미터로 보내기 전에 값을 검사한다.
    pub fn validate(self, value: f64) -> Result<f64, TargetError> {
        if !value.is_finite() {
            return Err(TargetError::NotFinite {
                target: self.label(),
                value,
            });
        }

        let (min, max) = self.bounds();
        if value < min || value > max {
            return Err(TargetError::OutOfRange {
                target: self.label(),
                value,
                min,
                max,
                unit: self.unit(),
            });
        }

        Ok(value)
    }
}
