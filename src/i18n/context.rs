//! Task-local "current locale" storage
//!
//! Each invocation runs inside its own locale scope. A locale set inside a
//! scope stays visible to that task across `.await` points and is never seen
//! by other tasks, including tasks spawned from it.

use std::cell::RefCell;
use std::future::Future;
use crate::utils::errors::{I18nError, Result};

tokio::task_local! {
    static CURRENT_LOCALE: RefCell<Option<String>>;
}

/// Run `fut` in a fresh, unset locale scope
pub async fn scope<F: Future>(fut: F) -> F::Output {
    CURRENT_LOCALE.scope(RefCell::new(None), fut).await
}

/// Run `fut` in a fresh scope with `locale` already bound
pub async fn scope_with<F: Future>(locale: impl Into<String>, fut: F) -> F::Output {
    CURRENT_LOCALE.scope(RefCell::new(Some(locale.into())), fut).await
}

/// Bind `locale` for the rest of the current scope
pub fn set(locale: impl Into<String>) -> Result<()> {
    let locale = locale.into();
    CURRENT_LOCALE
        .try_with(|cell| {
            *cell.borrow_mut() = Some(locale);
        })
        .map_err(|_| I18nError::NoLocaleScope)
}

/// The locale bound in the current scope, if any
pub fn get() -> Option<String> {
    CURRENT_LOCALE
        .try_with(|cell| cell.borrow().clone())
        .ok()
        .flatten()
}

/// Whether the current task is running inside a locale scope
pub fn in_scope() -> bool {
    CURRENT_LOCALE.try_with(|_| ()).is_ok()
}
