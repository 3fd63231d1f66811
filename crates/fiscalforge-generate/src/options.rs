//! Composable generation options.
//!
//! Options are plain configuration functions applied left to right over a
//! zero-valued [`GenerationConfig`]: later scalar options win, blocked
//! placeholder lists accumulate.

/// Run-time configuration for one generation call.
#[derive(Debug, Clone, Default)]
pub struct GenerationConfig {
    /// Placeholder names whose enclosing elements are removed from output.
    pub blocked_placeholders: Vec<String>,
    /// Override for every personal tax ID placeholder.
    pub cpf: Option<String>,
    /// Override for every company tax ID placeholder.
    pub cnpj: Option<String>,
}

impl GenerationConfig {
    /// Folds an ordered list of options into a fresh config.
    pub fn from_options(options: impl IntoIterator<Item = GenerateOption>) -> Self {
        let mut config = Self::default();
        for option in options {
            option.apply(&mut config);
        }
        config
    }

    pub(crate) fn cpf_override(&self) -> Option<&str> {
        self.cpf.as_deref().filter(|value| !value.is_empty())
    }

    pub(crate) fn cnpj_override(&self) -> Option<&str> {
        self.cnpj.as_deref().filter(|value| !value.is_empty())
    }
}

/// A single configuration function for [`GenerationConfig`].
pub struct GenerateOption(Box<dyn FnOnce(&mut GenerationConfig) + Send>);

impl GenerateOption {
    pub(crate) fn apply(self, config: &mut GenerationConfig) {
        (self.0)(config)
    }
}

/// Sets a custom CPF used verbatim for every personal tax ID placeholder.
pub fn with_cpf(cpf: impl Into<String>) -> GenerateOption {
    let cpf = cpf.into();
    GenerateOption(Box::new(move |config| config.cpf = Some(cpf)))
}

/// Sets a custom CNPJ used verbatim for every company tax ID placeholder.
pub fn with_cnpj(cnpj: impl Into<String>) -> GenerateOption {
    let cnpj = cnpj.into();
    GenerateOption(Box::new(move |config| config.cnpj = Some(cnpj)))
}

/// Blocks placeholders so their enclosing elements are pruned from output.
/// Repeated applications accumulate.
pub fn with_blocked_placeholders<I, S>(placeholders: I) -> GenerateOption
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let placeholders: Vec<String> = placeholders.into_iter().map(Into::into).collect();
    GenerateOption(Box::new(move |config| {
        config.blocked_placeholders.extend(placeholders);
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_scalar_options_win() {
        let config = GenerationConfig::from_options([
            with_cpf("11111111111"),
            with_cpf("22222222222"),
        ]);
        assert_eq!(config.cpf.as_deref(), Some("22222222222"));
    }

    #[test]
    fn blocked_placeholders_accumulate() {
        let config = GenerationConfig::from_options([
            with_blocked_placeholders(["emitCNPJ"]),
            with_blocked_placeholders(["CPF", "fone"]),
        ]);
        assert_eq!(config.blocked_placeholders, ["emitCNPJ", "CPF", "fone"]);
    }

    #[test]
    fn empty_override_is_ignored() {
        let config = GenerationConfig::from_options([with_cnpj("")]);
        assert_eq!(config.cnpj_override(), None);
    }
}
