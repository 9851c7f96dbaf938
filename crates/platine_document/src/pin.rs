//! Pins and their four keyword-coded attribute tables.
//!
//! Each attribute enum pairs a variant with the exact lowercase keyword
//! the command language uses for it. Lookup is case-sensitive; `IO` is a
//! name fragment, not a direction.

use std::fmt;

use platine_foundation::{CoordPair, ElementId, Rotation};

/// Electrical direction of a pin.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinDirection {
    /// Not connected.
    NotConnected,
    /// Input only.
    Input,
    /// Output only.
    Output,
    /// Bidirectional.
    #[default]
    InOut,
    /// Open collector output.
    OpenCollector,
    /// Power pin.
    Power,
    /// Passive pin.
    Passive,
    /// High impedance output.
    HighZ,
    /// Supply pin.
    Supply,
}

impl PinDirection {
    /// All directions, in table order.
    pub const ALL: [Self; 9] = [
        Self::NotConnected,
        Self::Input,
        Self::Output,
        Self::InOut,
        Self::OpenCollector,
        Self::Power,
        Self::Passive,
        Self::HighZ,
        Self::Supply,
    ];

    /// The command keyword for this direction.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::NotConnected => "nc",
            Self::Input => "in",
            Self::Output => "out",
            Self::InOut => "io",
            Self::OpenCollector => "oc",
            Self::Power => "pwr",
            Self::Passive => "pas",
            Self::HighZ => "hiz",
            Self::Supply => "sup",
        }
    }

    /// Looks a direction up by its exact keyword.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|d| d.code() == code)
    }
}

impl fmt::Display for PinDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Decoration drawn at the pin's symbol edge.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinFunction {
    /// Plain pin.
    #[default]
    None,
    /// Inversion dot.
    Dot,
    /// Clock wedge.
    Clock,
    /// Inversion dot plus clock wedge.
    DotClock,
}

impl PinFunction {
    /// All functions, in table order.
    pub const ALL: [Self; 4] = [Self::None, Self::Dot, Self::Clock, Self::DotClock];

    /// The command keyword for this function.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Dot => "dot",
            Self::Clock => "clk",
            Self::DotClock => "dotclk",
        }
    }

    /// Looks a function up by its exact keyword.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|fun| fun.code() == code)
    }
}

impl fmt::Display for PinFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Stem length of a pin in grid steps.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinLength {
    /// No stem, connection point only.
    Point,
    /// One grid step.
    Short,
    /// Two grid steps.
    #[default]
    Middle,
    /// Three grid steps.
    Long,
}

impl PinLength {
    /// All lengths, in table order.
    pub const ALL: [Self; 4] = [Self::Point, Self::Short, Self::Middle, Self::Long];

    /// The command keyword for this length.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Point => "point",
            Self::Short => "short",
            Self::Middle => "middle",
            Self::Long => "long",
        }
    }

    /// Looks a length up by its exact keyword.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|len| len.code() == code)
    }
}

impl fmt::Display for PinLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Which of the pin's text labels are drawn.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PinVisibility {
    /// Pad name and pin name.
    #[default]
    Both,
    /// Pad name only.
    Pad,
    /// Pin name only.
    Pin,
    /// Neither label.
    Off,
}

impl PinVisibility {
    /// All visibilities, in table order.
    pub const ALL: [Self; 4] = [Self::Both, Self::Pad, Self::Pin, Self::Off];

    /// The command keyword for this visibility.
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Both => "both",
            Self::Pad => "pad",
            Self::Pin => "pin",
            Self::Off => "off",
        }
    }

    /// Looks a visibility up by its exact keyword.
    #[must_use]
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|vis| vis.code() == code)
    }
}

impl fmt::Display for PinVisibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A named connection point on a symbol.
///
/// Every attribute defaults to the same value the command language
/// assumes when the keyword is absent, so a bare `PIN 'X'` and a fully
/// spelled-out clause build through the same path.
#[derive(Debug)]
pub struct Pin {
    id: ElementId,
    name: String,
    origin: CoordPair,
    direction: PinDirection,
    function: PinFunction,
    length: PinLength,
    visibility: PinVisibility,
    rotation: Rotation,
    swap_level: u8,
}

impl Pin {
    /// Creates a pin at the origin with default attributes.
    #[must_use]
    pub fn new(id: ElementId, name: impl Into<String>) -> Self {
        let mut rotation = Rotation::quadrant();
        rotation.set_allow_mirror(true);
        Self {
            id,
            name: name.into(),
            origin: CoordPair::new(),
            direction: PinDirection::default(),
            function: PinFunction::default(),
            length: PinLength::default(),
            visibility: PinVisibility::default(),
            rotation,
            swap_level: 0,
        }
    }

    /// The identity handle this pin was created under.
    #[must_use]
    pub const fn id(&self) -> ElementId {
        self.id
    }

    /// The pin name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Renames the pin.
    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The connection point, in millimeters.
    #[must_use]
    pub const fn origin(&self) -> &CoordPair {
        &self.origin
    }

    /// Mutable access to the connection point.
    pub fn origin_mut(&mut self) -> &mut CoordPair {
        &mut self.origin
    }

    /// The electrical direction.
    #[must_use]
    pub const fn direction(&self) -> PinDirection {
        self.direction
    }

    /// Sets the electrical direction.
    pub fn set_direction(&mut self, direction: PinDirection) {
        self.direction = direction;
    }

    /// The edge decoration.
    #[must_use]
    pub const fn function(&self) -> PinFunction {
        self.function
    }

    /// Sets the edge decoration.
    pub fn set_function(&mut self, function: PinFunction) {
        self.function = function;
    }

    /// The stem length.
    #[must_use]
    pub const fn length(&self) -> PinLength {
        self.length
    }

    /// Sets the stem length.
    pub fn set_length(&mut self, length: PinLength) {
        self.length = length;
    }

    /// The label visibility.
    #[must_use]
    pub const fn visibility(&self) -> PinVisibility {
        self.visibility
    }

    /// Sets the label visibility.
    pub fn set_visibility(&mut self, visibility: PinVisibility) {
        self.visibility = visibility;
    }

    /// The quadrant-constrained orientation.
    #[must_use]
    pub const fn rotation(&self) -> &Rotation {
        &self.rotation
    }

    /// Mutable access to the orientation.
    pub fn rotation_mut(&mut self) -> &mut Rotation {
        &mut self.rotation
    }

    /// The gate swap group, zero meaning not swappable.
    #[must_use]
    pub const fn swap_level(&self) -> u8 {
        self.swap_level
    }

    /// Sets the gate swap group.
    pub fn set_swap_level(&mut self, level: u8) {
        self.swap_level = level;
    }
}

impl fmt::Display for Pin {
    /// Renders in command-echo form, e.g.
    /// `'VDD' (0.0 -2.54) pas none short both R0 0`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "'{}' {} {} {} {} {} {} {}",
            self.name,
            self.origin,
            self.direction,
            self.function,
            self.length,
            self.visibility,
            self.rotation,
            self.swap_level
        )
    }
}
