use std::{error::Error as StdError, fmt, io};

use backtrace::Backtrace;
use thiserror::Error;

pub trait ErrorCode: StdError + 'static {
    /// process exit code and stable error code
    fn code(&self) -> (u8, &'static str);
}

#[derive(Error, Debug)]
pub enum Code {
    #[error(transparent)]
    Any(#[from] anyhow::Error),
    #[error("Resource unavailable. {path}: {source}")]
    ResourceUnavailable {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("Invalid pattern. {0}")]
    PatternCompile(#[source] regex::Error),
    #[error("Please recheck the configuration.see: {0}")]
    BadConfig(String),
}

impl ErrorCode for Code {
    fn code(&self) -> (u8, &'static str) {
        match self {
            Self::Any(_) => (1, "1010001"),
            Self::ResourceUnavailable { .. } => (2, "1010002"),
            Self::PatternCompile(_) => (3, "1010003"),
            Self::BadConfig(_) => (4, "1010004"),
        }
    }
}

pub struct WithBacktrace {
    source: Code,
    backtrace: Backtrace,
}

impl WithBacktrace {
    pub fn exit_code(&self) -> u8 {
        self.source.code().0
    }
}

impl fmt::Debug for WithBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WithBacktrace")
            .field("source", &self.source)
            .field("backtrace", &self.backtrace)
            .finish()
    }
}

impl fmt::Display for WithBacktrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.source)
    }
}

impl StdError for WithBacktrace {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        Some(&self.source)
    }
}

impl From<Code> for WithBacktrace {
    fn from(code: Code) -> Self {
        WithBacktrace {
            source: code,
            backtrace: Backtrace::new(),
        }
    }
}

impl From<WithBacktrace> for Code {
    fn from(value: WithBacktrace) -> Self {
        value.source
    }
}

#[inline]
pub fn any<E: StdError>(err: E) -> WithBacktrace {
    WithBacktrace {
        source: Code::Any(anyhow::anyhow!("{}", err.to_string())),
        backtrace: Backtrace::new(),
    }
}

#[inline]
pub fn anyhow(err: anyhow::Error) -> WithBacktrace {
    WithBacktrace {
        source: Code::Any(err),
        backtrace: Backtrace::new(),
    }
}

#[inline]
pub fn resource_unavailable<S: ToString + ?Sized>(
    path: &S,
    err: io::Error,
) -> WithBacktrace {
    WithBacktrace {
        source: Code::ResourceUnavailable {
            path: path.to_string(),
            source: err,
        },
        backtrace: Backtrace::new(),
    }
}

#[inline]
pub fn pattern_compile(err: regex::Error) -> WithBacktrace {
    WithBacktrace {
        source: Code::PatternCompile(err),
        backtrace: Backtrace::new(),
    }
}

#[inline]
pub fn bad_config<S: ToString + ?Sized>(err: &S) -> WithBacktrace {
    WithBacktrace {
        source: Code::BadConfig(err.to_string()),
        backtrace: Backtrace::new(),
    }
}
