//! Bundled document templates and the generator that fills them.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use crate::engine::resolve_template;
use crate::errors::GenerationError;
use crate::fields::FieldRegistry;
use crate::options::GenerateOption;

const CFE_TEMPLATE: &str = include_str!("../templates/cfe.xml");
const NFE_TEMPLATE: &str = include_str!("../templates/nfe.xml");
const NFCE_TEMPLATE: &str = include_str!("../templates/nfce.xml");
const NFE_DEVOLUCAO_TEMPLATE: &str = include_str!("../templates/nfe_devolucao.xml");

/// The fiscal document layouts shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateKind {
    CFe,
    NFe,
    NFCe,
    NFeDevolucao,
}

impl TemplateKind {
    pub const ALL: [TemplateKind; 4] = [
        TemplateKind::CFe,
        TemplateKind::NFe,
        TemplateKind::NFCe,
        TemplateKind::NFeDevolucao,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TemplateKind::CFe => "CFe",
            TemplateKind::NFe => "NFe",
            TemplateKind::NFCe => "NFCe",
            TemplateKind::NFeDevolucao => "NFeDevolucao",
        }
    }

    /// The raw template skeleton with its placeholders intact.
    pub fn template(self) -> &'static str {
        match self {
            TemplateKind::CFe => CFE_TEMPLATE,
            TemplateKind::NFe => NFE_TEMPLATE,
            TemplateKind::NFCe => NFCE_TEMPLATE,
            TemplateKind::NFeDevolucao => NFE_DEVOLUCAO_TEMPLATE,
        }
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = GenerationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "CFe" => Ok(TemplateKind::CFe),
            "NFe" => Ok(TemplateKind::NFe),
            "NFCe" => Ok(TemplateKind::NFCe),
            "NFeDevolucao" => Ok(TemplateKind::NFeDevolucao),
            other => Err(GenerationError::UnsupportedTemplateType(other.to_string())),
        }
    }
}

/// Generates documents from one template with its own RNG stream, so two
/// generators with the same seed produce the same sequence of documents.
pub struct DocumentGenerator {
    template: Cow<'static, str>,
    registry: FieldRegistry,
    rng: ChaCha8Rng,
}

impl DocumentGenerator {
    pub fn new(kind: TemplateKind) -> Self {
        Self::from_parts(Cow::Borrowed(kind.template()), ChaCha8Rng::from_os_rng())
    }

    /// A generator with reproducible output for a fixed seed.
    pub fn with_seed(kind: TemplateKind, seed: u64) -> Self {
        Self::from_parts(Cow::Borrowed(kind.template()), ChaCha8Rng::seed_from_u64(seed))
    }

    /// A generator over a caller-supplied template. The skeleton can use any
    /// key of the bundled catalog; unknown keys resolve to empty strings.
    pub fn from_template(template: impl Into<String>) -> Self {
        Self::from_parts(Cow::Owned(template.into()), ChaCha8Rng::from_os_rng())
    }

    fn from_parts(template: Cow<'static, str>, rng: ChaCha8Rng) -> Self {
        Self {
            template,
            registry: FieldRegistry::new(),
            rng,
        }
    }

    /// Produces one filled document as UTF-8 XML bytes.
    pub fn generate(
        &mut self,
        options: impl IntoIterator<Item = GenerateOption>,
    ) -> Result<Vec<u8>, GenerationError> {
        debug!(template_len = self.template.len(), "generating document");
        resolve_template(&self.template, &self.registry, &mut self.rng, options)
    }
}
