//! Interface layer
//! CLI/REPL 입력을 유스케이스 호출로 연결한다.

pub mod cli;
