use std::fmt::{Display, Formatter};
use std::process::{ExitCode, Termination};

use error_stack::{AttachmentKind, FrameKind, Report};

use kernel::KernelError;

#[derive(Debug)]
pub struct StackTrace(Report<KernelError>);

impl From<Report<KernelError>> for StackTrace {
    fn from(e: Report<KernelError>) -> Self {
        StackTrace(e)
    }
}

impl Termination for StackTrace {
    fn report(self) -> ExitCode {
        eprintln!("{}", ErrorMessage(&self.0));
        match self.0.current_context() {
            KernelError::Consistency | KernelError::Internal => self.0.report(),
            _ => ExitCode::FAILURE,
        }
    }
}

/// Message shown to the customer for a failed command.
pub struct ErrorMessage<'a>(&'a Report<KernelError>);

impl ErrorMessage<'_> {
    /// Most recent printable attachment of the report.
    fn detail(&self) -> Option<String> {
        self.0.frames().find_map(|frame| match frame.kind() {
            FrameKind::Attachment(AttachmentKind::Printable(printable)) => {
                Some(printable.to_string())
            }
            _ => None,
        })
    }
}

impl Display for ErrorMessage<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.0.current_context() {
            KernelError::Fetch => write!(f, "Could not load the car list. Please try again later."),
            KernelError::Parse => write!(f, "Saved data could not be read and was reset."),
            KernelError::NotFound => match self.detail() {
                Some(detail) => write!(f, "{detail}."),
                None => write!(f, "Not found."),
            },
            KernelError::Unavailable => {
                write!(f, "Sorry, this car is no longer available. Please choose another one.")
            }
            KernelError::Validation => match self.detail() {
                Some(detail) => write!(f, "{detail}."),
                None => write!(f, "Please correct the highlighted fields."),
            },
            KernelError::InvalidTransition => match self.detail() {
                Some(detail) => write!(f, "{detail}."),
                None => write!(f, "This order cannot be changed."),
            },
            KernelError::Consistency => write!(
                f,
                "A critical error occurred while saving your reservation. Please refresh and try again."
            ),
            KernelError::Concurrency => write!(
                f,
                "This order was already recorded elsewhere. Please refresh and try again."
            ),
            KernelError::Internal => write!(f, "Something went wrong. Please try again."),
        }
    }
}

#[cfg(test)]
mod test {
    use error_stack::Report;

    use kernel::KernelError;

    use super::ErrorMessage;

    #[test]
    fn attachment_is_shown_for_customer_errors() {
        let report = Report::new(KernelError::Validation).attach_printable("Invalid confirmation code");
        assert_eq!(ErrorMessage(&report).to_string(), "Invalid confirmation code.");

        let report = Report::new(KernelError::NotFound);
        assert_eq!(ErrorMessage(&report).to_string(), "Not found.");
    }

    #[test]
    fn internal_details_are_not_shown() {
        let report = Report::new(KernelError::Consistency)
            .attach_printable("Car 1 was marked unavailable but order x was not recorded");
        assert!(ErrorMessage(&report).to_string().starts_with("A critical error"));
    }
}
