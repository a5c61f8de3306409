//! Payment-method categories.
//!
//! The MTR feed publishes nine fares per station pair, one column per
//! combination of ticket type (Octopus card or single-journey ticket) and
//! passenger group. A fare lookup is always made for exactly one of these
//! categories.

use std::fmt;

/// Ticket type half of a fare category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TicketType {
    Octopus,
    SingleJourney,
}

/// One of the nine published payment-method categories.
///
/// The variants correspond one-to-one with the fare columns of the feed;
/// [`FareCategory::column`] gives the feed header for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FareCategory {
    OctopusAdult,
    OctopusStudent,
    /// JoyYou card for passengers aged 60+, the "senior class" concession.
    OctopusJoyYou,
    SingleAdult,
    OctopusChild,
    OctopusElderly,
    OctopusPwd,
    SingleChild,
    SingleElderly,
}

impl FareCategory {
    /// All nine categories, in declaration order (which is also the feed's
    /// column order).
    pub const ALL: [FareCategory; 9] = [
        FareCategory::OctopusAdult,
        FareCategory::OctopusStudent,
        FareCategory::OctopusJoyYou,
        FareCategory::SingleAdult,
        FareCategory::OctopusChild,
        FareCategory::OctopusElderly,
        FareCategory::OctopusPwd,
        FareCategory::SingleChild,
        FareCategory::SingleElderly,
    ];

    /// Position of this category in [`FareCategory::ALL`]. Used for
    /// columnar per-pair fare storage.
    pub const fn index(self) -> usize {
        self as usize
    }

    /// The feed column header holding this category's fare.
    pub const fn column(self) -> &'static str {
        match self {
            FareCategory::OctopusAdult => "OCT_ADT_FARE",
            FareCategory::OctopusStudent => "OCT_STD_FARE",
            FareCategory::OctopusJoyYou => "OCT_JOYYOU_SIXTY_FARE",
            FareCategory::SingleAdult => "SINGLE_ADT_FARE",
            FareCategory::OctopusChild => "OCT_CON_CHILD_FARE",
            FareCategory::OctopusElderly => "OCT_CON_ELDERLY_FARE",
            FareCategory::OctopusPwd => "OCT_CON_PWD_FARE",
            FareCategory::SingleChild => "SINGLE_CON_CHILD_FARE",
            FareCategory::SingleElderly => "SINGLE_CON_ELDERLY_FARE",
        }
    }

    /// The ticket type this category is sold on.
    pub const fn ticket(self) -> TicketType {
        match self {
            FareCategory::OctopusAdult
            | FareCategory::OctopusStudent
            | FareCategory::OctopusJoyYou
            | FareCategory::OctopusChild
            | FareCategory::OctopusElderly
            | FareCategory::OctopusPwd => TicketType::Octopus,
            FareCategory::SingleAdult | FareCategory::SingleChild | FareCategory::SingleElderly => {
                TicketType::SingleJourney
            }
        }
    }

    /// The adult category on the same ticket type.
    pub const fn adult_equivalent(self) -> FareCategory {
        match self.ticket() {
            TicketType::Octopus => FareCategory::OctopusAdult,
            TicketType::SingleJourney => FareCategory::SingleAdult,
        }
    }

    /// The child category on the same ticket type. This is the rate
    /// concessionary passengers are charged for the first-class premium.
    pub const fn child_equivalent(self) -> FareCategory {
        match self.ticket() {
            TicketType::Octopus => FareCategory::OctopusChild,
            TicketType::SingleJourney => FareCategory::SingleChild,
        }
    }

    /// True for the child/elderly/PWD concession categories, whose
    /// first-class premium is the child rate rather than their own base.
    /// Students and JoyYou holders are not in this group.
    pub const fn is_concession(self) -> bool {
        matches!(
            self,
            FareCategory::OctopusChild
                | FareCategory::OctopusElderly
                | FareCategory::OctopusPwd
                | FareCategory::SingleChild
                | FareCategory::SingleElderly
        )
    }

    /// Human-readable label.
    pub const fn label(self) -> &'static str {
        match self {
            FareCategory::OctopusAdult => "adult Octopus",
            FareCategory::OctopusStudent => "student Octopus",
            FareCategory::OctopusJoyYou => "JoyYou 60+ Octopus",
            FareCategory::SingleAdult => "adult single journey",
            FareCategory::OctopusChild => "child Octopus",
            FareCategory::OctopusElderly => "elderly Octopus",
            FareCategory::OctopusPwd => "PWD Octopus",
            FareCategory::SingleChild => "child single journey",
            FareCategory::SingleElderly => "elderly single journey",
        }
    }
}

impl fmt::Display for FareCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
