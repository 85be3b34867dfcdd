use thiserror::Error;

#[derive(Debug, Error)]
pub enum WalkError {
    #[error("composite scheduler needs at least one generator/rule pair")]
    NoArms,

    #[error("{got} {what} do not match {expected} generators")]
    ArmCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },
}

pub type WalkResult<T> = Result<T, WalkError>;
