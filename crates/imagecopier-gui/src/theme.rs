/// Colour palette for ImageCopier.
///
/// Semantic colours for log severities and the status bar, for both dark
/// and light visuals.
use egui::Color32;
use imagecopier_core::copier::{Outcome, Severity};

pub struct Palette {
    pub text: Color32,
    pub muted: Color32,
    pub accent: Color32,
    pub warning: Color32,
    pub error: Color32,
    pub success: Color32,
}

impl Palette {
    pub fn dark() -> Self {
        Self {
            text: Color32::from_rgb(0xe4, 0xe4, 0xe8),
            muted: Color32::from_rgb(0x6c, 0x70, 0x86),
            accent: Color32::from_rgb(0x89, 0xb4, 0xfa),
            warning: Color32::from_rgb(0xfa, 0xb3, 0x87),
            error: Color32::from_rgb(0xf3, 0x8b, 0xa8),
            success: Color32::from_rgb(0xa6, 0xe3, 0xa1),
        }
    }

    pub fn light() -> Self {
        Self {
            text: Color32::from_rgb(0x1e, 0x1e, 0x2e),
            muted: Color32::from_rgb(0x8a, 0x8a, 0x9a),
            accent: Color32::from_rgb(0x3a, 0x6f, 0xd8),
            warning: Color32::from_rgb(0xd0, 0x80, 0x20),
            error: Color32::from_rgb(0xd0, 0x40, 0x50),
            success: Color32::from_rgb(0x30, 0x98, 0x30),
        }
    }

    pub fn for_visuals(visuals: &egui::Visuals) -> Self {
        if visuals.dark_mode {
            Self::dark()
        } else {
            Self::light()
        }
    }

    pub fn severity(&self, severity: Severity) -> Color32 {
        match severity {
            Severity::Info => self.text,
            Severity::Warning => self.warning,
            Severity::Error => self.error,
        }
    }

    pub fn outcome(&self, outcome: Outcome) -> Color32 {
        match outcome {
            Outcome::Completed => self.success,
            Outcome::CompletedWithErrors | Outcome::Cancelled | Outcome::Warning => self.warning,
            Outcome::Error => self.error,
        }
    }
}
