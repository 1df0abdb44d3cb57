//! Bot-facing i18n extension
//!
//! [`I18nExtension`] pairs a translation store with the task-local locale
//! context and keeps track of the process-wide default instance used by
//! [`I18nExtension::contextual_get_text`] and the [`tr!`](crate::tr) macro.

use std::sync::{Arc, PoisonError, RwLock};
use tracing::{debug, info};
use crate::middleware::locale::InvocationPipeline;
use crate::utils::errors::{I18nError, Result};
use crate::utils::logging;
use super::context;
use super::format::TranslationParams;
use super::loader::{I18n, LookupOptions};

/// Name of the pre-invocation hook installed by [`I18nExtension::init_bot`]
pub const LOCALE_HOOK: &str = "i18n.locale";

static DEFAULT_INSTANCE: RwLock<Option<Arc<I18nExtension>>> = RwLock::new(None);

/// Translation store bound to the current task's locale
#[derive(Debug)]
pub struct I18nExtension {
    i18n: I18n,
}

impl I18nExtension {
    /// Wrap a store.
    ///
    /// The new instance becomes the process-wide default when `make_default`
    /// is set or when no default has been registered yet. A later default
    /// replaces an earlier one.
    pub fn new(i18n: I18n, make_default: bool) -> Arc<Self> {
        let extension = Arc::new(Self { i18n });

        let mut slot = DEFAULT_INSTANCE
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        if make_default || slot.is_none() {
            if slot.is_some() {
                debug!("Replacing default i18n instance");
            }
            *slot = Some(extension.clone());
            info!(fallback = extension.i18n.fallback(), "Registered default i18n instance");
        }

        extension
    }

    /// The current process-wide default instance
    pub fn default_instance() -> Result<Arc<Self>> {
        DEFAULT_INSTANCE
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
            .ok_or(I18nError::NoDefaultInstance)
    }

    /// Whether this instance is the process-wide default
    pub fn is_default(self: &Arc<Self>) -> bool {
        DEFAULT_INSTANCE
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|current| Arc::ptr_eq(current, self))
    }

    pub fn i18n(&self) -> &I18n {
        &self.i18n
    }

    /// Install the locale hook with the default resolver, which always picks the fallback
    pub fn init_bot<Ctx: 'static>(self: &Arc<Self>, pipeline: &mut InvocationPipeline<Ctx>) -> Result<()> {
        let fallback = self.i18n.fallback().to_string();
        self.init_bot_with(pipeline, move |_: &Ctx| fallback.clone())
    }

    /// Install a hook that binds `get_locale(ctx)` before every invocation.
    ///
    /// Fails with `HookConflict` if the pipeline already has a locale hook.
    pub fn init_bot_with<Ctx, F>(
        self: &Arc<Self>,
        pipeline: &mut InvocationPipeline<Ctx>,
        get_locale: F,
    ) -> Result<()>
    where
        Ctx: 'static,
        F: Fn(&Ctx) -> String + Send + Sync + 'static,
    {
        let extension = Arc::clone(self);
        pipeline.before_invoke(LOCALE_HOOK, move |ctx: &Ctx| {
            extension.set_current_locale(get_locale(ctx))
        })
    }

    /// Bind `locale` for the current task
    pub fn set_current_locale(&self, locale: impl Into<String>) -> Result<()> {
        let locale = locale.into();
        logging::log_locale_bound(&locale);
        context::set(locale)
    }

    /// The current task's locale, or the fallback if none is bound
    pub fn get_current_locale(&self) -> String {
        context::get().unwrap_or_else(|| self.i18n.fallback().to_string())
    }

    /// Look up `key` in the current task's locale
    pub fn get_text(
        &self,
        key: &str,
        options: &LookupOptions,
        params: &TranslationParams,
    ) -> Result<String> {
        self.i18n
            .get_text(key, &self.get_current_locale(), options, params)
    }

    /// Look up `key` with the default instance and the current task's locale
    pub fn contextual_get_text(
        key: &str,
        options: &LookupOptions,
        params: &TranslationParams,
    ) -> Result<String> {
        Self::default_instance()?.get_text(key, options, params)
    }
}

/// Translate a key with the default instance and the current locale.
///
/// ```ignore
/// let text = tr!("commands.start.welcome", name = user.first_name)?;
/// ```
#[macro_export]
macro_rules! tr {
    ($key:expr $(, $name:ident = $value:expr)* $(,)?) => {{
        #[allow(unused_mut)]
        let mut params = $crate::i18n::TranslationParams::new();
        $(
            params.insert(
                ::std::string::String::from(stringify!($name)),
                $crate::i18n::FormatArg::from($value),
            );
        )*
        $crate::i18n::I18nExtension::contextual_get_text(
            $key,
            &$crate::i18n::LookupOptions::default(),
            &params,
        )
    }};
}
