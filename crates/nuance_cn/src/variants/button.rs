//! Button variants and sizes

use std::fmt;
use std::str::FromStr;

use crate::error::StyleError;

/// Colors and border for one interaction state. Colors are token names
/// (or hex literals) resolved against the active theme.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StateStyle {
    pub background_color: &'static str,
    pub border_color: &'static str,
    pub border_width: f32,
    pub color: &'static str,
}

/// Per-state styles for a button variant
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ButtonVariantStyle {
    pub pressed: StateStyle,
    pub not_pressed: StateStyle,
    pub disabled: StateStyle,
}

impl ButtonVariantStyle {
    /// States paired with their names, for diagnostics
    pub fn states(&self) -> [(&'static str, &StateStyle); 3] {
        [
            ("pressed", &self.pressed),
            ("not pressed", &self.not_pressed),
            ("disabled", &self.disabled),
        ]
    }
}

const DISABLED: StateStyle = StateStyle {
    background_color: "gray.200",
    border_color: "gray.200",
    border_width: 1.0,
    color: "gray.400",
};

const DISABLED_FLAT: StateStyle = StateStyle {
    background_color: "transparent",
    border_color: "transparent",
    border_width: 0.0,
    color: "gray.400",
};

const PRIMARY: ButtonVariantStyle = ButtonVariantStyle {
    pressed: StateStyle {
        background_color: "primary.700",
        border_color: "primary.700",
        border_width: 1.0,
        color: "white",
    },
    not_pressed: StateStyle {
        background_color: "primary.500",
        border_color: "primary.500",
        border_width: 1.0,
        color: "white",
    },
    disabled: DISABLED,
};

const SECONDARY: ButtonVariantStyle = ButtonVariantStyle {
    pressed: StateStyle {
        background_color: "secondary.700",
        border_color: "secondary.700",
        border_width: 1.0,
        color: "white",
    },
    not_pressed: StateStyle {
        background_color: "secondary.500",
        border_color: "secondary.500",
        border_width: 1.0,
        color: "white",
    },
    disabled: DISABLED,
};

const OUTLINE: ButtonVariantStyle = ButtonVariantStyle {
    pressed: StateStyle {
        background_color: "primary.50",
        border_color: "primary.700",
        border_width: 1.0,
        color: "primary.700",
    },
    not_pressed: StateStyle {
        background_color: "transparent",
        border_color: "primary.500",
        border_width: 1.0,
        color: "primary.500",
    },
    disabled: StateStyle {
        background_color: "transparent",
        border_color: "gray.200",
        border_width: 1.0,
        color: "gray.400",
    },
};

const GHOST: ButtonVariantStyle = ButtonVariantStyle {
    pressed: StateStyle {
        background_color: "primary.50",
        border_color: "transparent",
        border_width: 0.0,
        color: "primary.700",
    },
    not_pressed: StateStyle {
        background_color: "transparent",
        border_color: "transparent",
        border_width: 0.0,
        color: "primary.500",
    },
    disabled: DISABLED_FLAT,
};

const LINK: ButtonVariantStyle = ButtonVariantStyle {
    pressed: StateStyle {
        background_color: "transparent",
        border_color: "transparent",
        border_width: 0.0,
        color: "primary.700",
    },
    not_pressed: StateStyle {
        background_color: "transparent",
        border_color: "transparent",
        border_width: 0.0,
        color: "primary.500",
    },
    disabled: DISABLED_FLAT,
};

/// Button visual presets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Outline,
    Ghost,
    Link,
}

impl ButtonVariant {
    pub const ALL: [ButtonVariant; 5] = [
        ButtonVariant::Primary,
        ButtonVariant::Secondary,
        ButtonVariant::Outline,
        ButtonVariant::Ghost,
        ButtonVariant::Link,
    ];

    pub fn name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "Primary",
            ButtonVariant::Secondary => "Secondary",
            ButtonVariant::Outline => "Outline",
            ButtonVariant::Ghost => "Ghost",
            ButtonVariant::Link => "Link",
        }
    }

    pub fn style(self) -> &'static ButtonVariantStyle {
        match self {
            ButtonVariant::Primary => &PRIMARY,
            ButtonVariant::Secondary => &SECONDARY,
            ButtonVariant::Outline => &OUTLINE,
            ButtonVariant::Ghost => &GHOST,
            ButtonVariant::Link => &LINK,
        }
    }
}

impl fmt::Display for ButtonVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonVariant {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ButtonVariant::ALL
            .into_iter()
            .find(|variant| variant.name() == s)
            .ok_or_else(|| StyleError::UnknownVariant {
                kind: "button",
                name: s.to_string(),
            })
    }
}

/// Button sizes; a fixed lookup, not theme driven
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Sm,
    #[default]
    Md,
    Lg,
}

impl ButtonSize {
    pub fn padding_x(self) -> f32 {
        match self {
            ButtonSize::Sm => 12.0,
            ButtonSize::Md => 24.0,
            ButtonSize::Lg => 48.0,
        }
    }

    pub fn min_width(self) -> f32 {
        match self {
            ButtonSize::Sm => 64.0,
            ButtonSize::Md => 128.0,
            ButtonSize::Lg => 256.0,
        }
    }
}

impl FromStr for ButtonSize {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sm" => Ok(ButtonSize::Sm),
            "md" => Ok(ButtonSize::Md),
            "lg" => Ok(ButtonSize::Lg),
            other => Err(StyleError::UnknownSize(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_round_trip() {
        for variant in ButtonVariant::ALL {
            assert_eq!(variant.name().parse::<ButtonVariant>().unwrap(), variant);
        }
    }

    #[test]
    fn undeclared_variant_is_an_error() {
        let err = "Danger".parse::<ButtonVariant>().unwrap_err();
        assert!(matches!(
            err,
            StyleError::UnknownVariant { kind: "button", ref name } if name == "Danger"
        ));
    }

    #[test]
    fn sizes_scale_up() {
        assert_eq!(ButtonSize::default(), ButtonSize::Md);
        assert!(ButtonSize::Sm.min_width() < ButtonSize::Md.min_width());
        assert_eq!(ButtonSize::Lg.padding_x(), 48.0);
        assert!("xl".parse::<ButtonSize>().is_err());
    }
}
