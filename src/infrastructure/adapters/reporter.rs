//! 콘솔 리포터 포트 구현 어댑터.
//!
//! 표준출력은 로봇 호출 레코드와 조회 결과 전용이므로 사람용 메시지는 stderr로 보낸다.

use std::io::{self, IsTerminal};

use crate::application::ports::Reporter;

/// 콘솔 전용 리포터 어댑터.
pub struct ConsoleReporter {
    interactive: bool,
}

impl Default for ConsoleReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ConsoleReporter {
    /// stderr가 TTY일 때만 색상을 사용한다.
    pub fn new() -> Self {
        Self {
            interactive: io::stderr().is_terminal(),
        }
    }
}

impl Reporter for ConsoleReporter {
    fn kv(&self, key: &str, value: &str) {
        eprintln!("  {:<14}: {}", key, value);
    }

    fn status(&self, scope: &str, message: &str) {
        if self.interactive {
            eprintln!("[{}] {}", colorize_scope(scope), message);
        } else {
            eprintln!("[{:<9}] {}", scope, message);
        }
    }
}

fn colorize_scope(scope: &str) -> String {
    match scope {
        "gait" => format!("\x1b[36m{scope:<9}\x1b[0m"),
        "service" => format!("\x1b[33m{scope:<9}\x1b[0m"),
        "parameter" => format!("\x1b[32m{scope:<9}\x1b[0m"),
        _ => format!("{scope:<9}"),
    }
}
