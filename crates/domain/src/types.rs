// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::error::DomainError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// The editing phase of a shipment draft.
///
/// `Submitted` is terminal: ownership has passed to the persistence boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DraftPhase {
    /// Nothing linked or edited yet.
    #[default]
    Empty,
    /// Pre-populated from an order, not yet edited.
    Linked,
    /// Edited by the user.
    Editing,
    /// Validated and handed off.
    Submitted,
}

impl DraftPhase {
    /// Converts this phase to its string representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Empty => "empty",
            Self::Linked => "linked",
            Self::Editing => "editing",
            Self::Submitted => "submitted",
        }
    }

    /// Checks if a transition from this phase to another is valid.
    ///
    /// Valid transitions are:
    /// - `Empty` → `Empty` (unlinking nothing), `Linked`, `Editing`
    /// - `Linked` / `Editing` → `Linked`, `Editing`, `Submitted`
    /// - `Submitted` → nothing
    #[must_use]
    pub const fn can_transition_to(&self, target: Self) -> bool {
        matches!(
            (self, target),
            (Self::Empty, Self::Empty | Self::Linked | Self::Editing)
                | (
                    Self::Linked | Self::Editing,
                    Self::Linked | Self::Editing | Self::Submitted
                )
        )
    }

    /// Returns whether the draft no longer accepts commands.
    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Submitted)
    }
}

impl FromStr for DraftPhase {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "empty" => Ok(Self::Empty),
            "linked" => Ok(Self::Linked),
            "editing" => Ok(Self::Editing),
            "submitted" => Ok(Self::Submitted),
            _ => Err(DomainError::InvalidDraftPhase(s.to_string())),
        }
    }
}

impl std::fmt::Display for DraftPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The transport mode declared on a shipment.
///
/// `Multimodal` means the shipment is decomposed into an explicit ordered
/// list of segments. Every other value implies a single-leg plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    /// Truck or van.
    #[default]
    Road,
    /// Rail freight.
    Rail,
    /// Ocean freight.
    Sea,
    /// Air freight.
    Air,
    /// More than one mode, carried by explicit segments.
    Multimodal,
}

impl TransportMode {
    /// Converts this mode to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Rail => "rail",
            Self::Sea => "sea",
            Self::Air => "air",
            Self::Multimodal => "multimodal",
        }
    }

    /// Returns whether this mode requires an explicit segment list.
    #[must_use]
    pub const fn is_multimodal(&self) -> bool {
        matches!(self, Self::Multimodal)
    }

    /// Returns the segment mode carried by a single-leg plan.
    ///
    /// `None` for `Multimodal`, which never applies to a segment.
    #[must_use]
    pub const fn segment_mode(&self) -> Option<SegmentMode> {
        match self {
            Self::Road => Some(SegmentMode::Road),
            Self::Rail => Some(SegmentMode::Rail),
            Self::Sea => Some(SegmentMode::Sea),
            Self::Air => Some(SegmentMode::Air),
            Self::Multimodal => None,
        }
    }
}

impl FromStr for TransportMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "road" => Ok(Self::Road),
            "rail" => Ok(Self::Rail),
            "sea" => Ok(Self::Sea),
            "air" => Ok(Self::Air),
            "multimodal" => Ok(Self::Multimodal),
            _ => Err(DomainError::InvalidTransportMode(s.to_string())),
        }
    }
}

impl std::fmt::Display for TransportMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The transport mode of a single segment.
///
/// Segments are always carried by exactly one mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SegmentMode {
    /// Truck or van.
    #[default]
    Road,
    /// Rail freight.
    Rail,
    /// Ocean freight.
    Sea,
    /// Air freight.
    Air,
}

impl SegmentMode {
    /// Converts this mode to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Road => "road",
            Self::Rail => "rail",
            Self::Sea => "sea",
            Self::Air => "air",
        }
    }
}

impl From<SegmentMode> for TransportMode {
    fn from(mode: SegmentMode) -> Self {
        match mode {
            SegmentMode::Road => Self::Road,
            SegmentMode::Rail => Self::Rail,
            SegmentMode::Sea => Self::Sea,
            SegmentMode::Air => Self::Air,
        }
    }
}

impl FromStr for SegmentMode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<TransportMode>()?
            .segment_mode()
            .ok_or_else(|| DomainError::InvalidTransportMode(s.to_string()))
    }
}

impl std::fmt::Display for SegmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Whether a shipment stays inside one country or crosses a border.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ShipmentType {
    /// Origin and destination in the same country.
    #[default]
    Domestic,
    /// Long-haul shipment between countries.
    International,
    /// Short-haul shipment across a land border.
    CrossBorder,
}

impl ShipmentType {
    /// Converts this shipment type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Domestic => "domestic",
            Self::International => "international",
            Self::CrossBorder => "cross_border",
        }
    }

    /// Returns whether customs-related fields (incoterm) apply.
    #[must_use]
    pub const fn requires_customs(&self) -> bool {
        matches!(self, Self::International | Self::CrossBorder)
    }
}

impl FromStr for ShipmentType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "domestic" => Ok(Self::Domestic),
            "international" => Ok(Self::International),
            "cross_border" => Ok(Self::CrossBorder),
            _ => Err(DomainError::InvalidShipmentType(s.to_string())),
        }
    }
}

impl std::fmt::Display for ShipmentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Incoterms 2020 delivery terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Incoterm {
    /// Ex Works.
    Exw,
    /// Free Carrier.
    Fca,
    /// Free Alongside Ship.
    Fas,
    /// Free On Board.
    Fob,
    /// Cost and Freight.
    Cfr,
    /// Cost, Insurance and Freight.
    Cif,
    /// Carriage Paid To.
    Cpt,
    /// Carriage and Insurance Paid To.
    Cip,
    /// Delivered At Place.
    Dap,
    /// Delivered at Place Unloaded.
    Dpu,
    /// Delivered Duty Paid.
    Ddp,
}

impl Incoterm {
    /// Converts this incoterm to its three-letter code.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Exw => "EXW",
            Self::Fca => "FCA",
            Self::Fas => "FAS",
            Self::Fob => "FOB",
            Self::Cfr => "CFR",
            Self::Cif => "CIF",
            Self::Cpt => "CPT",
            Self::Cip => "CIP",
            Self::Dap => "DAP",
            Self::Dpu => "DPU",
            Self::Ddp => "DDP",
        }
    }
}

impl FromStr for Incoterm {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "EXW" => Ok(Self::Exw),
            "FCA" => Ok(Self::Fca),
            "FAS" => Ok(Self::Fas),
            "FOB" => Ok(Self::Fob),
            "CFR" => Ok(Self::Cfr),
            "CIF" => Ok(Self::Cif),
            "CPT" => Ok(Self::Cpt),
            "CIP" => Ok(Self::Cip),
            "DAP" => Ok(Self::Dap),
            "DPU" => Ok(Self::Dpu),
            "DDP" => Ok(Self::Ddp),
            _ => Err(DomainError::InvalidIncoterm(s.to_string())),
        }
    }
}

impl std::fmt::Display for Incoterm {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The kind of handoff at the end of a segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    /// Sea or river port.
    Port,
    /// Storage warehouse.
    Warehouse,
    /// Intermodal terminal.
    Terminal,
    /// Cross-docking platform.
    CrossDock,
    /// Airport cargo area.
    Airport,
    /// Rail yard.
    RailYard,
    /// Anything else; describe it in the transfer location.
    Other,
}

impl TransferType {
    /// Converts this transfer type to its wire representation.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Port => "port",
            Self::Warehouse => "warehouse",
            Self::Terminal => "terminal",
            Self::CrossDock => "cross_dock",
            Self::Airport => "airport",
            Self::RailYard => "rail_yard",
            Self::Other => "other",
        }
    }
}

impl FromStr for TransferType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "port" => Ok(Self::Port),
            "warehouse" => Ok(Self::Warehouse),
            "terminal" => Ok(Self::Terminal),
            "cross_dock" => Ok(Self::CrossDock),
            "airport" => Ok(Self::Airport),
            "rail_yard" => Ok(Self::RailYard),
            "other" => Ok(Self::Other),
            _ => Err(DomainError::InvalidTransferType(s.to_string())),
        }
    }
}

impl std::fmt::Display for TransferType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Identifier of a contracted carrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CarrierId(i64);

impl CarrierId {
    /// Wraps a carrier identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for CarrierId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of an order that can be linked to a shipment draft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct OrderId(i64);

impl OrderId {
    /// Wraps an order identifier.
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a segment within one draft.
///
/// Segments loaded from the persistence boundary carry their row id.
/// Segments created while editing get a draft key from the plan manager.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind", content = "id")]
pub enum SegmentKey {
    /// A segment already known to the persistence boundary.
    Persisted(i64),
    /// A segment created in this draft and not yet saved.
    Draft(u64),
}

impl std::fmt::Display for SegmentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Persisted(id) => write!(f, "segment#{id}"),
            Self::Draft(id) => write!(f, "draft-segment#{id}"),
        }
    }
}

/// Cargo totals copied from an order or entered on the shipment.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct CargoTotals {
    /// Gross weight in kilograms.
    pub weight_kg: Option<f64>,
    /// Volume in cubic metres.
    pub volume_m3: Option<f64>,
    /// Number of handling units.
    pub package_count: Option<u32>,
}

impl CargoTotals {
    /// Creates cargo totals.
    #[must_use]
    pub const fn new(
        weight_kg: Option<f64>,
        volume_m3: Option<f64>,
        package_count: Option<u32>,
    ) -> Self {
        Self {
            weight_kg,
            volume_m3,
            package_count,
        }
    }
}
