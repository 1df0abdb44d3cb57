//! Pre-invocation hook pipeline
//!
//! Handlers run through [`InvocationPipeline::invoke`], which opens a fresh
//! locale scope and runs every registered hook, in registration order, before
//! the handler body. Hooks are named; registering a name twice is an error
//! rather than a silent replacement.

use std::fmt;
use std::future::Future;
use std::sync::Arc;
use teloxide::types::{Message, User};
use tracing::{debug, error};
use crate::i18n::context;
use crate::utils::errors::{I18nError, Result};

/// A synchronous pre-invocation hook
pub type PreInvokeHook<Ctx> = Arc<dyn Fn(&Ctx) -> Result<()> + Send + Sync>;

struct NamedHook<Ctx> {
    name: String,
    hook: PreInvokeHook<Ctx>,
}

/// Ordered set of pre-invocation hooks for one kind of request context
pub struct InvocationPipeline<Ctx> {
    hooks: Vec<NamedHook<Ctx>>,
}

impl<Ctx> Default for InvocationPipeline<Ctx> {
    fn default() -> Self {
        Self { hooks: Vec::new() }
    }
}

impl<Ctx> fmt::Debug for InvocationPipeline<Ctx> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InvocationPipeline")
            .field("hooks", &self.hook_names())
            .finish()
    }
}

impl<Ctx> InvocationPipeline<Ctx> {
    /// Create an empty pipeline
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook to run before every invocation
    pub fn before_invoke<F>(&mut self, name: impl Into<String>, hook: F) -> Result<()>
    where
        F: Fn(&Ctx) -> Result<()> + Send + Sync + 'static,
    {
        let name = name.into();
        if self.hooks.iter().any(|h| h.name == name) {
            return Err(I18nError::HookConflict(format!(
                "a pre-invocation hook named '{}' is already registered",
                name
            )));
        }

        debug!(hook = %name, position = self.hooks.len(), "Registered pre-invocation hook");
        self.hooks.push(NamedHook {
            name,
            hook: Arc::new(hook),
        });
        Ok(())
    }

    /// Names of the registered hooks, in execution order
    pub fn hook_names(&self) -> Vec<&str> {
        self.hooks.iter().map(|h| h.name.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Run all hooks then `handler` inside a fresh locale scope.
    ///
    /// The first failing hook aborts the invocation and its error is returned;
    /// the handler is not called.
    pub async fn invoke<F, Fut, T>(&self, ctx: Ctx, handler: F) -> Result<T>
    where
        F: FnOnce(Ctx) -> Fut,
        Fut: Future<Output = T>,
    {
        context::scope(async move {
            for named in &self.hooks {
                if let Err(e) = (named.hook)(&ctx) {
                    error!(hook = %named.name, error = %e, "Pre-invocation hook failed");
                    return Err(e);
                }
            }
            Ok(handler(ctx).await)
        })
        .await
    }
}

/// Telegram language code of a message sender
pub fn user_language_code(user: Option<&User>) -> Option<&str> {
    user.and_then(|u| u.language_code.as_deref())
}

/// Telegram language code of a message's sender
pub fn message_language_code(msg: &Message) -> Option<&str> {
    user_language_code(msg.from.as_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use assert_matches::assert_matches;

    #[tokio::test]
    async fn test_hooks_run_in_order_before_handler() {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let mut pipeline = InvocationPipeline::<u32>::new();

        let first = calls.clone();
        pipeline
            .before_invoke("first", move |ctx: &u32| {
                first.lock().unwrap().push(format!("first:{}", ctx));
                Ok(())
            })
            .unwrap();
        let second = calls.clone();
        pipeline
            .before_invoke("second", move |ctx: &u32| {
                second.lock().unwrap().push(format!("second:{}", ctx));
                Ok(())
            })
            .unwrap();

        let handler_calls = calls.clone();
        let result = pipeline
            .invoke(7, |ctx| async move {
                handler_calls.lock().unwrap().push("handler".to_string());
                ctx * 2
            })
            .await;

        assert_eq!(result.unwrap(), 14);
        assert_eq!(*calls.lock().unwrap(), vec!["first:7", "second:7", "handler"]);
        assert_eq!(pipeline.hook_names(), vec!["first", "second"]);
    }

    #[tokio::test]
    async fn test_duplicate_hook_name_conflicts() {
        let mut pipeline = InvocationPipeline::<()>::new();
        pipeline.before_invoke("audit", |_| Ok(())).unwrap();

        assert_matches!(
            pipeline.before_invoke("audit", |_| Ok(())),
            Err(I18nError::HookConflict(_))
        );
        assert_eq!(pipeline.len(), 1);
    }

    #[tokio::test]
    async fn test_failing_hook_skips_handler() {
        let mut pipeline = InvocationPipeline::<()>::new();
        pipeline
            .before_invoke("deny", |_| Err(I18nError::Config("denied".to_string())))
            .unwrap();

        let ran = Arc::new(Mutex::new(false));
        let flag = ran.clone();
        let result = pipeline
            .invoke((), |_| async move {
                *flag.lock().unwrap() = true;
            })
            .await;

        assert_matches!(result, Err(I18nError::Config(_)));
        assert!(!*ran.lock().unwrap());
    }

    #[tokio::test]
    async fn test_invoke_opens_locale_scope() {
        let pipeline = InvocationPipeline::<()>::new();
        let inside = pipeline.invoke((), |_| async { context::in_scope() }).await;
        assert!(inside.unwrap());
    }

    #[test]
    fn test_user_language_code() {
        let user = User {
            id: teloxide::types::UserId(42),
            is_bot: false,
            first_name: "Test".to_string(),
            last_name: None,
            username: None,
            language_code: Some("pt-BR".to_string()),
            is_premium: false,
            added_to_attachment_menu: false,
        };

        assert_eq!(user_language_code(Some(&user)), Some("pt-BR"));
        assert_eq!(user_language_code(None), None);
    }
}
