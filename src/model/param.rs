use std::fmt;

/// Every input and output slot used across the bend types.
///
/// A slot's meaning is fixed; which slots a bend carries, and in which
/// order, is decided once by the bend type's schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParamName {
    // Inputs
    Angle,
    OffsetHeight,
    RollOffset,
    ObstructionHeight,
    ObstructionWidth,
    Spacing,
    KickHeight,
    KickDirection,
    StubLength,
    BendCount,
    TargetRadius,
    // Outputs
    DistanceBetween,
    DistanceAcross,
    Shrink,
    DevelopedLength,
    HorizontalRun,
    MarkShift,
    TotalOffset,
    RollAngle,
    Travel,
    FirstMark,
    StubTakeUp,
    DistanceFromEnd,
    AnglePerBend,
    FirstLastAngle,
    MiddleAngle,
    MarkSpacing,
    AchievedRadius,
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Angle => "Angle",
            Self::OffsetHeight => "Offset Height",
            Self::RollOffset => "Roll Offset",
            Self::ObstructionHeight => "Obstruction Height",
            Self::ObstructionWidth => "Obstruction Width",
            Self::Spacing => "Spacing",
            Self::KickHeight => "Kick",
            Self::KickDirection => "Kick Direction",
            Self::StubLength => "Stub Length",
            Self::BendCount => "Number of Bends",
            Self::TargetRadius => "Desired Radius",
            Self::DistanceBetween => "Distance Between Bends",
            Self::DistanceAcross => "Distance Across",
            Self::Shrink => "Shrink",
            Self::DevelopedLength => "Developed Length",
            Self::HorizontalRun => "Horizontal Run",
            Self::MarkShift => "Mark Shift",
            Self::TotalOffset => "Total Offset",
            Self::RollAngle => "Roll Angle",
            Self::Travel => "Travel",
            Self::FirstMark => "First Mark",
            Self::StubTakeUp => "Stub Take-Up",
            Self::DistanceFromEnd => "Distance From End",
            Self::AnglePerBend => "Angle Per Bend",
            Self::FirstLastAngle => "First/Last Angle",
            Self::MiddleAngle => "Middle Angle",
            Self::MarkSpacing => "Mark Spacing",
            Self::AchievedRadius => "Achieved Radius",
        };
        f.write_str(label)
    }
}

/// How a parameter's value is interpreted and formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    /// Angle in degrees.
    FloatAngle,
    /// Length (or other scalar) in SI units.
    Float,
    /// Whole count.
    Integer,
    /// Index into a named enumeration of choices.
    StringEnum,
}

/// A parameter's current value; the variant must match the slot's kind.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParamValue {
    /// Angle in degrees.
    Angle(f64),
    Float(f64),
    Integer(i64),
    EnumIndex(usize),
}

impl ParamValue {
    /// Returns whether this value variant matches `kind`.
    #[must_use]
    pub fn matches(&self, kind: ParamKind) -> bool {
        matches!(
            (self, kind),
            (Self::Angle(_), ParamKind::FloatAngle)
                | (Self::Float(_), ParamKind::Float)
                | (Self::Integer(_), ParamKind::Integer)
                | (Self::EnumIndex(_), ParamKind::StringEnum)
        )
    }

    /// The angle in radians, if this is an angle value.
    #[must_use]
    pub fn as_radians(&self) -> Option<f64> {
        match self {
            Self::Angle(deg) => Some(deg.to_radians()),
            _ => None,
        }
    }

    /// The scalar value, if this is a float value.
    #[must_use]
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// The count, if this is an integer value.
    #[must_use]
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(v) => Some(*v),
            _ => None,
        }
    }

    /// The choice index, if this is an enumeration value.
    #[must_use]
    pub fn as_enum_index(&self) -> Option<usize> {
        match self {
            Self::EnumIndex(v) => Some(*v),
            _ => None,
        }
    }
}

/// Display color for input parameters.
pub const INPUT_COLOR: [f32; 3] = [0.31, 0.58, 0.92];
/// Display color for output parameters.
pub const OUTPUT_COLOR: [f32; 3] = [0.36, 0.78, 0.47];

/// One named parameter slot of a bend.
///
/// Owned exclusively by a [`crate::model::Bend`]; values are mutated only
/// through the bend's parameter-set operations, never directly by UI code.
#[derive(Debug, Clone)]
pub struct BendParameter {
    pub name: ParamName,
    pub kind: ParamKind,
    pub value: ParamValue,
    pub color: [f32; 3],
    pub enabled: bool,
    pub highlightable: bool,
}

impl BendParameter {
    /// An angle input slot with a default in degrees.
    #[must_use]
    pub fn angle(name: ParamName, default_deg: f64) -> Self {
        Self {
            name,
            kind: ParamKind::FloatAngle,
            value: ParamValue::Angle(default_deg),
            color: INPUT_COLOR,
            enabled: true,
            highlightable: true,
        }
    }

    /// A float input slot with a default.
    #[must_use]
    pub fn float(name: ParamName, default: f64) -> Self {
        Self {
            name,
            kind: ParamKind::Float,
            value: ParamValue::Float(default),
            color: INPUT_COLOR,
            enabled: true,
            highlightable: true,
        }
    }

    /// An integer input slot with a default.
    #[must_use]
    pub fn integer(name: ParamName, default: i64) -> Self {
        Self {
            name,
            kind: ParamKind::Integer,
            value: ParamValue::Integer(default),
            color: INPUT_COLOR,
            enabled: true,
            highlightable: false,
        }
    }

    /// A string-enumeration input slot with a default choice index.
    #[must_use]
    pub fn choice(name: ParamName, default_index: usize) -> Self {
        Self {
            name,
            kind: ParamKind::StringEnum,
            value: ParamValue::EnumIndex(default_index),
            color: INPUT_COLOR,
            enabled: true,
            highlightable: false,
        }
    }

    /// A float output slot, initially zero.
    #[must_use]
    pub fn output(name: ParamName) -> Self {
        Self {
            name,
            kind: ParamKind::Float,
            value: ParamValue::Float(0.0),
            color: OUTPUT_COLOR,
            enabled: true,
            highlightable: true,
        }
    }

    /// An angle output slot, initially zero degrees.
    #[must_use]
    pub fn angle_output(name: ParamName) -> Self {
        Self {
            name,
            kind: ParamKind::FloatAngle,
            value: ParamValue::Angle(0.0),
            color: OUTPUT_COLOR,
            enabled: true,
            highlightable: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn value_matches_kind() {
        assert!(ParamValue::Angle(30.0).matches(ParamKind::FloatAngle));
        assert!(ParamValue::Float(1.0).matches(ParamKind::Float));
        assert!(ParamValue::Integer(4).matches(ParamKind::Integer));
        assert!(ParamValue::EnumIndex(1).matches(ParamKind::StringEnum));
        assert!(!ParamValue::Float(1.0).matches(ParamKind::FloatAngle));
    }

    #[test]
    fn angle_converts_to_radians() {
        let rad = ParamValue::Angle(90.0).as_radians();
        assert!(rad.is_some());
        assert!((rad.unwrap_or(0.0) - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
    }

    #[test]
    fn display_labels() {
        assert_eq!(ParamName::DistanceBetween.to_string(), "Distance Between Bends");
        assert_eq!(ParamName::StubTakeUp.to_string(), "Stub Take-Up");
    }
}
