//! Dialect dispatch: resolve a dialect name and hand the source to its translator.
//!
//! The name → translator mapping is a `match` over the closed [`DialectId`] set, so there is no
//! registry to build or share at runtime.

use cppify_core::lang::dialects::{self, DialectId};

use crate::backend::{
    DialectTranslator, EmitConfig, JavaScriptTranslator, JavaTranslator, PythonTranslator, TranspileError,
    TranspileResult,
};

/// Resolve a dialect name (any letter casing).
///
/// ## Errors
///
/// [`TranspileError::UnsupportedDialect`] carrying `name` exactly as given.
pub fn resolve(name: &str) -> TranspileResult<DialectId> {
    dialects::from_str(name).ok_or_else(|| TranspileError::unsupported_dialect(name))
}

/// Return the translator for a dialect.
pub fn translator_for(id: DialectId) -> &'static dyn DialectTranslator {
    match id {
        DialectId::Python => &PythonTranslator,
        DialectId::JavaScript => &JavaScriptTranslator,
        DialectId::Java => &JavaTranslator,
    }
}

/// Translate `source` written in the dialect called `name`.
pub fn dispatch(name: &str, source: &str) -> TranspileResult<String> {
    dispatch_with_config(name, source, &EmitConfig::default())
}

/// Translate `source` written in the dialect called `name`, using `config`.
#[tracing::instrument(skip(source, config), fields(source_len = source.len()))]
pub fn dispatch_with_config(name: &str, source: &str, config: &EmitConfig) -> TranspileResult<String> {
    let id = resolve(name)?;
    tracing::debug!(dialect = %id, "resolved dialect");
    translator_for(id).translate_with_config(source, config)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_any_casing() {
        assert_eq!(resolve("Python").unwrap(), DialectId::Python);
        assert_eq!(resolve("JAVASCRIPT").unwrap(), DialectId::JavaScript);
        assert_eq!(resolve("java").unwrap(), DialectId::Java);
    }

    #[test]
    fn test_unknown_name_keeps_original_casing() {
        let err = dispatch("CoBoL", "x").unwrap_err();
        assert_eq!(err, TranspileError::unsupported_dialect("CoBoL"));
        assert!(err.to_string().contains("CoBoL"));
    }

    #[test]
    fn test_translator_for_matches_dialect() {
        for info in dialects::DIALECTS {
            assert_eq!(translator_for(info.id).dialect(), info.id);
        }
    }

    #[test]
    fn test_dispatch_delegates_unchanged() {
        let src = "let x = 5;\nconsole.log(x);";
        assert_eq!(
            dispatch("JavaScript", src).unwrap(),
            JavaScriptTranslator.translate(src).unwrap()
        );
    }

    #[test]
    fn test_dispatch_with_config() {
        let out = dispatch_with_config("python", "x = 1", &EmitConfig::new().with_indent_width(2)).unwrap();
        assert!(out.contains("\n  auto x = 1;\n  return 0;\n}"));
    }

    #[test]
    fn test_padded_name_is_unsupported() {
        assert!(matches!(
            dispatch(" python", ""),
            Err(TranspileError::UnsupportedDialect { .. })
        ));
    }
}
