//! One interpreter session: reader + evaluator + root environment.

use minim_eval::{EvalError, Evaluator};
use minim_ir::{Env, SharedInterner};
use minim_read::{read_all, ReadError};
use thiserror::Error;

/// Failure from [`Session::eval_source`].
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("read error: {0}")]
    Read(#[from] ReadError),
    #[error("{0}")]
    Eval(#[from] EvalError),
}

/// Reader, evaluator, and one persistent root environment. The REPL
/// keeps a session alive across inputs; `run` uses one per file.
pub struct Session {
    interner: SharedInterner,
    evaluator: Evaluator,
    env: Env,
}

impl Session {
    pub fn new() -> Self {
        let interner = SharedInterner::default();
        Session {
            evaluator: Evaluator::new(&interner),
            interner,
            env: Env::new(),
        }
    }

    /// Evaluate every form in `source` in order, returning the rendered
    /// value of the last one; `None` when the source holds no forms.
    pub fn eval_source(&mut self, source: &str) -> Result<Option<String>, SessionError> {
        let forms = read_all(source, &self.interner)?;
        let mut last = None;
        for form in &forms {
            last = Some(self.evaluator.eval(form, &self.env)?);
        }
        Ok(last.map(|value| value.display(&self.interner).to_string()))
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
