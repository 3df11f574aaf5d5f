//! XML encoding of hotel collections.
//!
//! # Format
//!
//! One `<hotels>` root, one `<hotel>` child per record, one child element per
//! attribute in declaration order:
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <hotels><hotel><name>The test hotel</name><address>01, test street</address><stars>5</stars><contact>test test</contact><phone>+33 (0)2 24 56 78 90</phone><uri>https://test.com/</uri></hotel></hotels>
//! ```
//!
//! Characters that XML 1.0 does not allow (C0 controls other than tab, line
//! feed and carriage return, `U+FFFE`, `U+FFFF`) are written as `U+FFFD`.

use std::borrow::Cow;

use quick_xml::{Reader, events::Event};
use serde::Serialize;

use super::{Error, Result};
use crate::hotel::Hotel;

/// Root element name.
pub const ROOT: &str = "hotels";

/// Element name of a single hotel.
const HOTEL: &[u8] = b"hotel";

/// XML declaration written before the root element.
pub const DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// Borrowed view used for encoding: the field name becomes the child element name.
#[derive(Serialize)]
struct HotelsRef<'a> {
    hotel: &'a [Hotel],
}

/// Encodes hotels as an XML document.
///
/// # Example
///
/// ```ignore
/// let bytes = xml::to_vec(&hotels)?;
/// ```
pub fn to_vec(hotels: &[Hotel]) -> Result<Vec<u8>> {
    let hotels: Cow<'_, [Hotel]> = if hotels.iter().all(is_xml_safe) {
        Cow::Borrowed(hotels)
    } else {
        Cow::Owned(hotels.iter().map(to_xml_safe).collect())
    };

    let body = quick_xml::se::to_string_with_root(ROOT, &HotelsRef { hotel: &hotels })?;

    let mut document = String::with_capacity(DECLARATION.len() + 1 + body.len());
    document.push_str(DECLARATION);
    document.push('\n');
    document.push_str(&body);

    Ok(document.into_bytes())
}

fn is_xml_char(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\r'
            | '\u{20}'..='\u{D7FF}'
            | '\u{E000}'..='\u{FFFD}'
            | '\u{10000}'..='\u{10FFFF}'
    )
}

fn text_fields(hotel: &Hotel) -> [&str; 5] {
    [&hotel.name, &hotel.address, &hotel.contact, &hotel.phone, &hotel.uri]
}

fn is_xml_safe(hotel: &Hotel) -> bool {
    text_fields(hotel).iter().all(|text| text.chars().all(is_xml_char))
}

fn to_xml_safe(hotel: &Hotel) -> Hotel {
    let safe = |text: &str| -> String {
        text.chars()
            .map(|c| if is_xml_char(c) { c } else { char::REPLACEMENT_CHARACTER })
            .collect()
    };

    Hotel {
        name: safe(&hotel.name),
        address: safe(&hotel.address),
        stars: hotel.stars,
        contact: safe(&hotel.contact),
        phone: safe(&hotel.phone),
        uri: safe(&hotel.uri),
    }
}

/// Child element of `<hotel>`.
#[derive(Debug, Clone, Copy)]
enum Field {
    Name,
    Address,
    Stars,
    Contact,
    Phone,
    Uri,
}

impl Field {
    fn from_tag(tag: &[u8]) -> Result<Self> {
        match tag {
            b"name" => Ok(Self::Name),
            b"address" => Ok(Self::Address),
            b"stars" => Ok(Self::Stars),
            b"contact" => Ok(Self::Contact),
            b"phone" => Ok(Self::Phone),
            b"uri" => Ok(Self::Uri),
            other => Err(Error::UnexpectedXml(format!(
                "element <{}>",
                String::from_utf8_lossy(other)
            ))),
        }
    }
}

/// Field values collected for one `<hotel>` element.
#[derive(Debug, Default)]
struct HotelFields {
    name: Option<String>,
    address: Option<String>,
    stars: Option<String>,
    contact: Option<String>,
    phone: Option<String>,
    uri: Option<String>,
}

impl HotelFields {
    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Address => &mut self.address,
            Field::Stars => &mut self.stars,
            Field::Contact => &mut self.contact,
            Field::Phone => &mut self.phone,
            Field::Uri => &mut self.uri,
        };
        *slot = Some(value);
    }

    fn build(self) -> Result<Hotel> {
        let stars = required(self.stars, "stars")?;

        Ok(Hotel {
            name: required(self.name, "name")?,
            address: required(self.address, "address")?,
            stars: stars.parse::<u8>().map_err(|_| Error::InvalidStars(stars))?,
            contact: required(self.contact, "contact")?,
            phone: required(self.phone, "phone")?,
            uri: required(self.uri, "uri")?,
        })
    }
}

fn required(value: Option<String>, field: &'static str) -> Result<String> {
    value.ok_or(Error::MissingField(field))
}

/// Decoder position inside the document.
enum State {
    Document,
    Root,
    Hotel(HotelFields),
    Field(HotelFields, Field, String),
    Done,
}

/// Decodes an XML document produced by [`to_vec`].
///
/// Text content is taken as is: leading and trailing whitespace of a value
/// is part of the value.
pub fn from_slice(bytes: &[u8]) -> Result<Vec<Hotel>> {
    let text = std::str::from_utf8(bytes)?;
    let mut reader = Reader::from_str(text);
    let mut hotels = Vec::new();
    let mut state = State::Document;

    loop {
        state = match (state, reader.read_event()?) {
            (State::Document, Event::Start(e)) if e.name().as_ref() == ROOT.as_bytes() => {
                State::Root
            }
            (State::Document, Event::Empty(e)) if e.name().as_ref() == ROOT.as_bytes() => {
                State::Done
            }
            (State::Root, Event::Start(e)) if e.name().as_ref() == HOTEL => {
                State::Hotel(HotelFields::default())
            }
            (State::Root, Event::End(_)) => State::Done,
            (State::Hotel(fields), Event::Start(e)) => {
                State::Field(fields, Field::from_tag(e.name().as_ref())?, String::new())
            }
            (State::Hotel(mut fields), Event::Empty(e)) => {
                fields.set(Field::from_tag(e.name().as_ref())?, String::new());
                State::Hotel(fields)
            }
            (State::Hotel(fields), Event::End(_)) => {
                hotels.push(fields.build()?);
                State::Root
            }
            (State::Field(fields, field, mut value), Event::Text(e)) => {
                value.push_str(&e.unescape()?);
                State::Field(fields, field, value)
            }
            (State::Field(fields, field, mut value), Event::CData(e)) => {
                value.push_str(&e.decode().map_err(quick_xml::Error::from)?);
                State::Field(fields, field, value)
            }
            (State::Field(mut fields, field, value), Event::End(_)) => {
                fields.set(field, value);
                State::Hotel(fields)
            }
            (State::Done, Event::Eof) => return Ok(hotels),
            // Markup between elements
            (
                state @ (State::Document | State::Root | State::Hotel(_) | State::Done),
                Event::Text(e),
            ) if e.iter().all(u8::is_ascii_whitespace) => state,
            (
                state,
                Event::Decl(_) | Event::Comment(_) | Event::PI(_) | Event::DocType(_),
            ) if !matches!(state, State::Field(..)) => state,
            (_, Event::Eof) => return Err(Error::UnexpectedXml("end of document".to_string())),
            (_, event) => return Err(Error::UnexpectedXml(format!("{event:?}"))),
        };
    }
}
