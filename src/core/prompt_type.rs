//! Prompt type definitions
//!
//! A prompt type names one kind of generated document. Each kind is backed by
//! a single template file in the template store and produces output files whose
//! names start with the prompt type key.

use crate::core::CursorflowError;

/// The kinds of prompt documents cursorflow can generate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PromptType {
    /// Research plan for a feature
    ResearchPlan,
    /// Step-by-step implementation plan
    ImplementationPlan,
    /// UI/UX design system generator
    UiUxDesign,
    /// Bridge between UI/UX design and code
    UiUxBridge,
    /// Project-wide coding rules
    ProjectRules,
    /// Testing rules
    TestRules,
}

impl PromptType {
    /// Every prompt type, in generation order.
    pub const ALL: [PromptType; 6] = [
        PromptType::ResearchPlan,
        PromptType::ImplementationPlan,
        PromptType::UiUxDesign,
        PromptType::UiUxBridge,
        PromptType::ProjectRules,
        PromptType::TestRules,
    ];

    /// The key used on the command line and as the output filename prefix.
    pub const fn as_str(self) -> &'static str {
        match self {
            PromptType::ResearchPlan => "research_plan",
            PromptType::ImplementationPlan => "implementation_plan",
            PromptType::UiUxDesign => "ui_ux_design",
            PromptType::UiUxBridge => "ui_ux_bridge",
            PromptType::ProjectRules => "project_rules",
            PromptType::TestRules => "test_rules",
        }
    }

    /// File name of the common template inside the template store.
    pub const fn template_name(self) -> &'static str {
        match self {
            PromptType::ResearchPlan => "research_plan_common.prompt.md",
            PromptType::ImplementationPlan => "implementation_plan_common.prompt.md",
            PromptType::UiUxDesign => "ui_ux_design_generator.prompt.md",
            PromptType::UiUxBridge => "ui_ux_bridge.prompt.md",
            PromptType::ProjectRules => "project_rules_common.prompt.md",
            PromptType::TestRules => "test_rules_common.prompt.md",
        }
    }

    /// Prefix of generated output filenames.
    pub const fn output_prefix(self) -> &'static str {
        self.as_str()
    }

    /// Human-readable label used by the wizard summary.
    pub const fn label(self) -> &'static str {
        match self {
            PromptType::ResearchPlan => "Research plan",
            PromptType::ImplementationPlan => "Implementation plan",
            PromptType::UiUxDesign => "UI/UX design system",
            PromptType::UiUxBridge => "UI/UX bridge",
            PromptType::ProjectRules => "Project rules",
            PromptType::TestRules => "Test rules",
        }
    }

    fn supported_list() -> String {
        Self::ALL.iter().map(|t| t.as_str()).collect::<Vec<_>>().join(", ")
    }
}

impl std::fmt::Display for PromptType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PromptType {
    type Err = CursorflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL.into_iter().find(|t| t.as_str() == wanted).ok_or_else(|| {
            CursorflowError::UnsupportedPromptType {
                input: s.to_string(),
                supported: Self::supported_list(),
            }
        })
    }
}

/// What the `prompt_type` positional asked for: one prompt type, or all of them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptSelection {
    /// Every prompt type
    All,
    /// A single prompt type
    Single(PromptType),
}

impl std::str::FromStr for PromptSelection {
    type Err = CursorflowError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim() == "all" {
            return Ok(PromptSelection::All);
        }
        s.parse::<PromptType>()
            .map(PromptSelection::Single)
            .map_err(|_| CursorflowError::UnsupportedPromptType {
                input: s.to_string(),
                supported: format!("{}, all", PromptType::supported_list()),
            })
    }
}
