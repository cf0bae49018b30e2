//! IO element decoding
//!
//! The IO section of a record is five groups in a fixed order. Each group is a
//! u16 count followed by that many (u16 property id, value) pairs, where the
//! value width is set by the group: 1, 2, 4 and 8 bytes, then a variable
//! length group whose values carry their own u16 length prefix.

use crate::cursor::ByteCursor;
use crate::metadata::{Annotation, IoMetadataTable};
use crate::types::{DecoderError, IoElement, IoValue, Result};

/// Value layout of one IO group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueWidth {
    /// u8
    One,
    /// i16
    Two,
    /// i32
    Four,
    /// IEEE 754 double
    Eight,
    /// u16 length, then raw bytes
    Variable,
}

/// Wire order of the IO groups
const GROUPS: [ValueWidth; 5] = [
    ValueWidth::One,
    ValueWidth::Two,
    ValueWidth::Four,
    ValueWidth::Eight,
    ValueWidth::Variable,
];

/// IO element decoder - reads the IO section of one AVL record
pub struct IoElementDecoder;

impl IoElementDecoder {
    /// Decode all five IO groups starting at the cursor.
    ///
    /// # Arguments
    /// * `cursor` - Positioned at the first group count
    /// * `metadata` - Table used to annotate elements, `None` to skip annotation
    ///
    /// # Returns
    /// * Elements of all groups concatenated in wire order
    pub fn decode(
        cursor: &mut ByteCursor<'_>,
        metadata: Option<&IoMetadataTable>,
    ) -> Result<Vec<IoElement>> {
        let mut elements = Vec::new();

        for width in GROUPS {
            let count = cursor.read_u16()?;
            log::trace!("IO group {:?}: {} elements", width, count);

            elements.reserve(usize::from(count));
            for _ in 0..count {
                let id = cursor.read_u16()?;
                let value = Self::read_value(cursor, width, id)?;
                elements.push(Self::annotate(id, value, metadata));
            }
        }

        Ok(elements)
    }

    fn read_value(cursor: &mut ByteCursor<'_>, width: ValueWidth, id: u16) -> Result<IoValue> {
        let value = match width {
            ValueWidth::One => IoValue::Integer(cursor.read_u8()?.into()),
            ValueWidth::Two => IoValue::Integer(cursor.read_i16()?.into()),
            ValueWidth::Four => IoValue::Integer(cursor.read_i32()?.into()),
            ValueWidth::Eight => IoValue::Float(cursor.read_f64()?),
            ValueWidth::Variable => {
                let declared = usize::from(cursor.read_u16()?);
                let remaining = cursor.remaining();
                if declared > remaining {
                    return Err(DecoderError::MalformedVariableLength {
                        property_id: id,
                        declared,
                        remaining,
                    });
                }
                IoValue::Hex(hex::encode(cursor.read_bytes(declared)?))
            }
        };
        Ok(value)
    }

    fn annotate(id: u16, value: IoValue, metadata: Option<&IoMetadataTable>) -> IoElement {
        let Annotation {
            label,
            dimension,
            value_human,
        } = metadata
            .map(|table| table.describe(id, &value))
            .unwrap_or_default();

        IoElement {
            id,
            value,
            label,
            dimension,
            value_human,
        }
    }
}
