use std::sync::Arc;
use thiserror::Error;

/// Result type alias using ExError
pub type Result<T> = std::result::Result<T, ExError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Every failure surfaced by the registry is classified by one of these
/// kinds. Each kind maps to a stable error code for programmatic handling,
/// tests and log assertions.
///
/// `ConstraintViolation` and `Persistence` are both storage failures; they
/// are split so that callers can tell a duplicate email/phone apart from an
/// engine or connection failure without inspecting messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Validation
    InvalidInput,

    // Storage
    ConstraintViolation,
    Persistence,

    // Configuration / IO
    Io,
    Serialization,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::ConstraintViolation => "ERR_CONSTRAINT_VIOLATION",
            ExErrorKind::Persistence => "ERR_PERSISTENCE",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Serialization => "ERR_SERIALIZATION",
        }
    }

    /// True for kinds raised by the storage engine
    pub fn is_storage(&self) -> bool {
        matches!(
            self,
            ExErrorKind::ConstraintViolation | ExErrorKind::Persistence
        )
    }
}

type Cause = Arc<dyn std::error::Error + Send + Sync + 'static>;

/// Canonical structured error type
///
/// Carries a classification kind, the operation that failed, a human
/// message and, for storage failures, the underlying engine error as its
/// `source()`.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    driver_id: Option<i64>,
    field: Option<String>,
    message: String,
    cause: Option<Cause>,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            driver_id: None,
            field: None,
            message: String::new(),
            cause: None,
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add driver ID context
    pub fn with_driver_id(mut self, id: i64) -> Self {
        self.driver_id = Some(id);
        self
    }

    /// Name the offending input field
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    /// Attach the underlying cause
    pub fn with_cause<E>(mut self, cause: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        self.cause = Some(Arc::new(cause));
        self
    }

    /// Get the error kind
    pub fn kind(&self) -> ExErrorKind {
        self.kind
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind.code()
    }

    /// True when the storage engine raised this error
    pub fn is_storage(&self) -> bool {
        self.kind.is_storage()
    }

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the driver ID context, if any
    pub fn driver_id(&self) -> Option<i64> {
        self.driver_id
    }

    /// Get the offending field, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get the underlying cause, if any
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

impl std::fmt::Display for ExError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}]", self.code())?;
        if let Some(op) = &self.op {
            write!(f, " in operation '{}'", op)?;
        }
        if !self.message.is_empty() {
            write!(f, ": {}", self.message)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        if let Some(driver_id) = self.driver_id {
            write!(f, " (driver_id: {})", driver_id)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.cause
            .as_deref()
            .map(|c| c as &(dyn std::error::Error + 'static))
    }
}

// ========== End Error Facility ==========

/// Domain validation errors for driver input
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DriverError {
    /// A required name field is empty or absent
    #[error("Driver {field} is missing")]
    MissingName { field: &'static str },

    /// Email is not a syntactically valid address
    #[error("Invalid email address: {email}")]
    InvalidEmail { email: String },

    /// Phone number is not a syntactically valid number
    #[error("Invalid phone number: {phone}")]
    InvalidPhone { phone: String },
}

impl From<DriverError> for ExError {
    fn from(err: DriverError) -> Self {
        let message = err.to_string();
        let field = match &err {
            DriverError::MissingName { field } => *field,
            DriverError::InvalidEmail { .. } => "email",
            DriverError::InvalidPhone { .. } => "phoneNumber",
        };
        ExError::new(ExErrorKind::InvalidInput)
            .with_field(field)
            .with_message(message)
            .with_cause(err)
    }
}
