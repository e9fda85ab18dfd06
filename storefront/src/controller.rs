// Adapted from: https://github.com/HalsekiRaika/architectured/blob/e5caa5c7ae801d1aaac6e275b3ea0ef26d6ff26b/server/src/controller.rs

use std::fmt::Display;
use std::future::IntoFuture;

use kernel::KernelError;

/// Turns command-line input into an application DTO.
pub trait Intake<I>: 'static + Sync + Send {
    type To;
    fn emit(&self, input: I) -> Self::To;
}

/// Turns an application result into the view printed for the customer.
pub trait Exhaust<O>: 'static + Sync + Send {
    type To: Display;
    fn emit(&self, output: O) -> Self::To;
}

/// One storefront command: input, service call, rendered view.
pub struct Controller<T, P> {
    transformer: T,
    presenter: P,
}

impl<T, P> Controller<T, P> {
    pub fn new(transformer: T, presenter: P) -> Self {
        Self {
            transformer,
            presenter,
        }
    }

    pub async fn handle<I, O, F, Fut>(
        self,
        input: I,
        f: F,
    ) -> error_stack::Result<String, KernelError>
    where
        T: Intake<I>,
        P: Exhaust<O>,
        F: FnOnce(T::To) -> Fut,
        Fut: IntoFuture<Output = error_stack::Result<O, KernelError>>,
    {
        let output = f(self.transformer.emit(input)).await?;
        Ok(self.render(output))
    }

    fn render<O>(&self, output: O) -> String
    where
        P: Exhaust<O>,
    {
        self.presenter.emit(output).to_string()
    }
}

impl<P> Controller<(), P> {
    /// For commands without arguments.
    pub fn present(presenter: P) -> Self {
        Self::new((), presenter)
    }

    pub async fn run<O, F, Fut>(self, f: F) -> error_stack::Result<String, KernelError>
    where
        P: Exhaust<O>,
        F: FnOnce() -> Fut,
        Fut: IntoFuture<Output = error_stack::Result<O, KernelError>>,
    {
        let output = f().await?;
        Ok(self.render(output))
    }
}
