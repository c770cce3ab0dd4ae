use crate::Error;
use core::{fmt, str::FromStr};
use serde::{Deserialize, Serialize};

/// Number of fields on a certificate.
pub const FIELD_COUNT: usize = 23;

/// Declares [`SubmissionRecord`] and [`Field`] from one list so the struct
/// members, the enum variants and the wire names can never drift apart.
macro_rules! define_submission_fields {
    ($($name:ident => $variant:ident),+ $(,)?) => {
        /// The full named set of text fields describing one certificate.
        ///
        /// Every field is a required string. No validation is performed
        /// beyond "is a string"; deserializing a JSON object that lacks a
        /// field fails.
        #[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
        pub struct SubmissionRecord {
            $(pub $name: String,)+
        }

        /// Names one field of a [`SubmissionRecord`].
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum Field {
            $($variant,)+
        }

        impl Field {
            /// Every field, in declaration order.
            pub const ALL: [Field; FIELD_COUNT] = [$(Field::$variant,)+];

            /// The wire name of the field (JSON key and CSV header).
            pub const fn name(self) -> &'static str {
                match self {
                    $(Field::$variant => stringify!($name),)+
                }
            }
        }

        impl SubmissionRecord {
            pub fn get(&self, field: Field) -> &str {
                match field {
                    $(Field::$variant => &self.$name,)+
                }
            }

            pub fn get_mut(&mut self, field: Field) -> &mut String {
                match field {
                    $(Field::$variant => &mut self.$name,)+
                }
            }
        }
    };
}

define_submission_fields! {
    exporter => Exporter,
    consignee => Consignee,
    pre_carriage_by => PreCarriageBy,
    place_of_receipt => PlaceOfReceipt,
    vessel_flight_no => VesselFlightNo,
    port_of_loading => PortOfLoading,
    lc_no => LcNo,
    port_of_discharge => PortOfDischarge,
    final_destination => FinalDestination,
    bl_awb_no => BlAwbNo,
    marks_nosandcontainer_no => MarksNosAndContainerNo,
    num_and_kind_of_pkgs => NumAndKindOfPkgs,
    description_of_goods => DescriptionOfGoods,
    quantity => Quantity,
    destination => Destination,
    consignor => Consignor,
    invoice_number => InvoiceNumber,
    manufacturer => Manufacturer,
    nationality => Nationality,
    total_quantity => TotalQuantity,
    date => Date,
    exporter_signature => ExporterSignature,
    certification_place => CertificationPlace,
}

impl SubmissionRecord {
    /// Iterates `(field, value)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL.into_iter().map(move |field| (field, self.get(field)))
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Field {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Field::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::UnknownField(s.to_owned()))
    }
}
