//! 섹터 로테이션 의사결정을 위한 도메인 모델.

mod allocation;
mod bar;
mod history;
mod host;
mod universe;

pub use allocation::*;
pub use bar::*;
pub use history::*;
pub use host::*;
pub use universe::*;
