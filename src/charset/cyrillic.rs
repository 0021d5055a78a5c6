//! Basic Latin punctuation and digits plus the Cyrillic letters used in Russian,
//! Ukrainian, Belarusian, Rusyn, Serbian, Bulgarian and Macedonian.
//!
//! Only upper case Latin letters that share a shape with Cyrillic ones are reachable,
//! codes 0x40..0x7F hold Cyrillic glyphs after [`CyrillicMin::remap`].

use super::Charset;

const GLYPHS: [u16; 96] = [
    // 0x00:
    0x0000, 0x0540, 0x0060, 0x156B, 0xB5CB, 0xBC5B, 0xD345, 0x0040, //  !"#$%&'
    0x0014, 0x4800, 0x5C5C, 0x1448, 0x0800, 0x1008, 0x0100, 0x0810, // ()*+,-./
    // 0x10:
    0xABB3, 0x0032, 0x93A9, 0x81AB, 0x302A, 0xB18B, 0xB38B, 0x80A2, // 01234567
    0xB3AB, 0xB1AB, 0x0440, 0x0840, 0x1014, 0x1109, 0x4808, 0x84A8, // 89:;<=>?
    // 0x20:
    0xB2AA, 0xB38B, 0x85EB, 0xA280, 0x0933, 0xB381, 0x366A, 0x81AB, // АБВГДЕЖЗ
    0x2A32, 0x2AB2, 0x3214, 0x0832, 0x6232, 0x322A, 0xA3A3, 0xA2A2, // ИЙКЛМНОП
    // 0x30:
    0xB2A8, 0xA381, 0x84C0, 0x312B, 0xB4E8, 0x4814, 0x2741, 0x302A, // РСТУФХЦЧ
    0x2763, 0x2763, 0x844B, 0x3722, 0x330B, 0x81AB, 0x36E3, 0xB8AA, // ШЩЪЫЬЭЮЯ
    // 0x40:
    0x1704, 0x041B, 0x7700, 0x1401, 0xB540, 0x1B00, 0x4C54, 0x009B, // абвгдежз
    0x0E00, 0x4E00, 0x0454, 0x0C00, 0x160A, 0x3640, 0x1700, 0x1600, // ийклмноп
    // 0x50:
    0xB240, 0x1300, 0x1408, 0x4810, 0x170B, 0x4814, 0x0700, 0x1400, // рстуфхцч
    0x0703, 0x0703, 0x1405, 0x0407, 0x044B, 0x000F, 0x0E0B, 0xBC40, // шщъыьэюя
];

/// UTF-8 lead bytes folded away by `remap`.
const LEAD_C3: u8 = 0xC3;
const LEAD_D0: u8 = 0xD0;
const LEAD_D1: u8 = 0xD1;

#[derive(Clone, Copy, Debug, Default)]
pub struct CyrillicMin;

impl Charset for CyrillicMin {
    fn glyph(&self, index: u16) -> u16 {
        GLYPHS
            .get(index as usize)
            .copied()
            .unwrap_or_else(|| self.fallback())
    }

    fn size(&self) -> u16 {
        GLYPHS.len() as u16
    }

    /// Drops the UTF-8 lead bytes of Cyrillic letters so every letter is a single code,
    /// fixing even the macOS 'wrong' Ë code (0xC3 0x8B).
    fn remap(&self, text: &mut [u8]) -> usize {
        let mut len = 0;
        let mut lead = None;

        for i in 0..text.len() {
            let mut ch = text[i];

            if matches!(ch, LEAD_C3 | LEAD_D0 | LEAD_D1) {
                lead = Some(ch);
                continue;
            }

            if let Some(prefix) = lead.take() {
                ch = match prefix {
                    LEAD_C3 if ch == 0x8B => 0x35,
                    LEAD_D0 => ch.wrapping_sub(0x50),
                    LEAD_D1 => ch.wrapping_sub(0x10),
                    _ => ch,
                };
            }

            text[len] = ch;
            len += 1;
        }

        len
    }
}
