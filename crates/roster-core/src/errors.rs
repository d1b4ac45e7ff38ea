use roster_core_types::RequestId;
use thiserror::Error;

/// Result type alias using RosterError
pub type Result<T> = std::result::Result<T, RosterError>;

// ========== Error Facility ==========

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code that can be used for programmatic
/// error handling, log assertions and user-facing messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExErrorKind {
    // Input
    InvalidInput,

    // Lookup
    NotFound,
    Empty,

    // Integration
    Io,

    // Internal
    Internal,
}

impl ExErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ExErrorKind::InvalidInput => "ERR_INVALID_INPUT",
            ExErrorKind::NotFound => "ERR_NOT_FOUND",
            ExErrorKind::Empty => "ERR_EMPTY",
            ExErrorKind::Io => "ERR_IO",
            ExErrorKind::Internal => "ERR_INTERNAL",
        }
    }
}

/// Canonical structured error type
///
/// Carries classification fields for programmatic handling and context for
/// debugging. Built with the `with_*` methods.
#[derive(Debug, Clone)]
pub struct ExError {
    kind: ExErrorKind,
    op: Option<String>,
    employee_id: Option<i64>,
    field: Option<String>,
    request_id: Option<RequestId>,
    message: String,
}

impl ExError {
    /// Create a new error with the specified kind
    pub fn new(kind: ExErrorKind) -> Self {
        Self {
            kind,
            op: None,
            employee_id: None,
            field: None,
            request_id: None,
            message: String::new(),
        }
    }

    /// Add operation context
    pub fn with_op(mut self, op: impl Into<String>) -> Self {
        self.op = Some(op.into());
        self
    }

    /// Add employee ID context
    pub fn with_employee_id(mut self, id: i64) -> Self {
        self.employee_id = Some(id);
        self
    }

    /// Add input field context
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Add request ID context
    pub fn with_request_id(mut self, request_id: RequestId) -> Self {
        self.request_id = Some(request_id);
        self
    }

    /// Add custom message
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
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

    /// Get the operation context, if any
    pub fn op(&self) -> Option<&str> {
        self.op.as_deref()
    }

    /// Get the employee ID context, if any
    pub fn employee_id(&self) -> Option<i64> {
        self.employee_id
    }

    /// Get the input field context, if any
    pub fn field(&self) -> Option<&str> {
        self.field.as_deref()
    }

    /// Get the request ID context, if any
    pub fn request_id(&self) -> Option<&RequestId> {
        self.request_id.as_ref()
    }

    /// Get the error message
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Whether the console loop can report this error and carry on
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self.kind,
            ExErrorKind::NotFound | ExErrorKind::Empty | ExErrorKind::InvalidInput
        )
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
        if let Some(id) = self.employee_id {
            write!(f, " (employee_id: {})", id)?;
        }
        if let Some(field) = &self.field {
            write!(f, " (field: {})", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ExError {}

impl From<std::io::Error> for ExError {
    fn from(err: std::io::Error) -> Self {
        ExError::new(ExErrorKind::Io).with_message(err.to_string())
    }
}

// ========== End Error Facility ==========

/// Error taxonomy for roster operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RosterError {
    /// No record carries the requested id
    #[error("Employee not found: {id}")]
    EmployeeNotFound { id: i64 },

    /// The roster holds no records
    #[error("Roster is empty")]
    EmptyRoster,

    /// Console text could not be parsed into the expected type
    #[error("Invalid {field}: {value:?}")]
    InvalidInput { field: String, value: String },
}

impl RosterError {
    /// Get the canonical kind for this error
    pub fn kind(&self) -> ExErrorKind {
        match self {
            RosterError::EmployeeNotFound { .. } => ExErrorKind::NotFound,
            RosterError::EmptyRoster => ExErrorKind::Empty,
            RosterError::InvalidInput { .. } => ExErrorKind::InvalidInput,
        }
    }
}

/// Conversion from RosterError to ExError
impl From<RosterError> for ExError {
    fn from(err: RosterError) -> Self {
        match err {
            RosterError::EmployeeNotFound { id } => ExError::new(ExErrorKind::NotFound)
                .with_employee_id(id)
                .with_message("Employee not found"),

            RosterError::EmptyRoster => {
                ExError::new(ExErrorKind::Empty).with_message("No employees to display")
            }

            RosterError::InvalidInput { field, value } => ExError::new(ExErrorKind::InvalidInput)
                .with_message(format!("Cannot parse {:?}", value))
                .with_field(field),
        }
    }
}
