//! JPEG fixtures built in memory, shared by unit and integration tests

#![allow(dead_code)]

use exif::experimental::Writer;
use exif::{Field, In, Rational, Tag, Value};
use std::io::Cursor;

fn ascii(text: &str) -> Value {
    Value::Ascii(vec![text.as_bytes().to_vec()])
}

fn dms(d: (u32, u32), m: (u32, u32), s: (u32, u32)) -> Value {
    Value::Rational(vec![
        Rational { num: d.0, denom: d.1 },
        Rational { num: m.0, denom: m.1 },
        Rational { num: s.0, denom: s.1 },
    ])
}

fn field(tag: Tag, value: Value) -> Field {
    Field {
        tag,
        ifd_num: In::PRIMARY,
        value,
    }
}

/// Wraps the EXIF fields in a TIFF blob inside a JPEG APP1 segment
pub fn jpeg_with_fields(fields: &[Field]) -> Vec<u8> {
    let mut writer = Writer::new();
    for field in fields {
        writer.push_field(field);
    }
    let mut tiff = Cursor::new(Vec::new());
    writer.write(&mut tiff, false).expect("Failed to encode EXIF");
    let tiff = tiff.into_inner();

    let segment_len = u16::try_from(2 + 6 + tiff.len()).expect("EXIF segment too large");
    let mut jpeg = vec![0xFF, 0xD8, 0xFF, 0xE1];
    jpeg.extend_from_slice(&segment_len.to_be_bytes());
    jpeg.extend_from_slice(b"Exif\0\0");
    jpeg.extend_from_slice(&tiff);
    jpeg.extend_from_slice(&[0xFF, 0xD9]);
    jpeg
}

/// 40°26'46.8"N 79°58'56.4"W
pub fn pittsburgh_jpeg() -> Vec<u8> {
    jpeg_with_fields(&[
        field(Tag::Make, ascii("TestCam")),
        field(Tag::GPSLatitudeRef, ascii("N")),
        field(Tag::GPSLatitude, dms((40, 1), (26, 1), (468, 10))),
        field(Tag::GPSLongitudeRef, ascii("W")),
        field(Tag::GPSLongitude, dms((79, 1), (58, 1), (564, 10))),
    ])
}

/// JPEG tagged with whole-degree coordinates
pub fn jpeg_at(latitude: u32, latitude_ref: &str, longitude: u32, longitude_ref: &str) -> Vec<u8> {
    jpeg_with_fields(&[
        field(Tag::GPSLatitudeRef, ascii(latitude_ref)),
        field(Tag::GPSLatitude, dms((latitude, 1), (0, 1), (0, 1))),
        field(Tag::GPSLongitudeRef, ascii(longitude_ref)),
        field(Tag::GPSLongitude, dms((longitude, 1), (0, 1), (0, 1))),
    ])
}

pub fn jpeg_without_gps() -> Vec<u8> {
    jpeg_with_fields(&[field(Tag::Make, ascii("TestCam"))])
}
