//! Buffered HTML writer with minimal allocations

use crate::error::Result;
use std::io::Write;

/// HTML writer that batches output in an internal buffer
pub struct HtmlWriter<W: Write> {
    writer: W,
    buffer: Vec<u8>,
    flush_threshold: usize,
}

impl<W: Write> HtmlWriter<W> {
    pub fn new(writer: W) -> Self {
        Self::with_capacity(writer, 16384)
    }

    pub fn with_capacity(writer: W, capacity: usize) -> Self {
        HtmlWriter {
            writer,
            buffer: Vec::with_capacity(capacity),
            flush_threshold: capacity / 2, // Flush at 50% capacity
        }
    }

    /// Auto-flush if buffer exceeds threshold
    #[inline]
    fn auto_flush(&mut self) -> Result<()> {
        if self.buffer.len() >= self.flush_threshold {
            self.flush()?;
        }
        Ok(())
    }

    /// Write raw bytes directly
    #[inline]
    pub fn write_raw(&mut self, data: &[u8]) -> Result<()> {
        self.buffer.extend_from_slice(data);
        self.auto_flush()
    }

    /// Write string data without escaping
    #[inline]
    pub fn write_str(&mut self, s: &str) -> Result<()> {
        self.write_raw(s.as_bytes())
    }

    /// Write an unsigned integer
    #[inline]
    pub fn write_int(&mut self, value: u64) -> Result<()> {
        let mut buf = itoa::Buffer::new();
        self.write_str(buf.format(value))
    }

    pub fn doctype(&mut self) -> Result<()> {
        self.write_raw(b"<!DOCTYPE html>\n")
    }

    /// Write element start tag (left open for attributes)
    #[inline]
    pub fn start_element(&mut self, name: &str) -> Result<()> {
        self.write_raw(b"<")?;
        self.write_str(name)
    }

    /// Write element end tag
    #[inline]
    pub fn end_element(&mut self, name: &str) -> Result<()> {
        self.write_raw(b"</")?;
        self.write_str(name)?;
        self.write_raw(b">")
    }

    /// Write attribute
    #[inline]
    pub fn attribute(&mut self, name: &str, value: &str) -> Result<()> {
        self.write_raw(b" ")?;
        self.write_str(name)?;
        self.write_raw(b"=\"")?;
        self.write_escaped(value)?;
        self.write_raw(b"\"")
    }

    /// Write attribute with integer value
    #[inline]
    pub fn attribute_int(&mut self, name: &str, value: u64) -> Result<()> {
        self.write_raw(b" ")?;
        self.write_str(name)?;
        self.write_raw(b"=\"")?;
        self.write_int(value)?;
        self.write_raw(b"\"")
    }

    /// Close start tag
    #[inline]
    pub fn close_start_tag(&mut self) -> Result<()> {
        self.write_raw(b">")
    }

    /// `<name>escaped text</name>` on one line
    pub fn text_element(&mut self, name: &str, text: &str) -> Result<()> {
        self.start_element(name)?;
        self.close_start_tag()?;
        self.write_escaped(text)?;
        self.end_element(name)
    }

    /// Write text content with HTML escaping
    #[inline]
    pub fn write_escaped(&mut self, text: &str) -> Result<()> {
        for ch in text.chars() {
            match ch {
                '&' => self.buffer.extend_from_slice(b"&amp;"),
                '<' => self.buffer.extend_from_slice(b"&lt;"),
                '>' => self.buffer.extend_from_slice(b"&gt;"),
                '"' => self.buffer.extend_from_slice(b"&quot;"),
                '\'' => self.buffer.extend_from_slice(b"&#39;"),
                c => {
                    let mut buf = [0u8; 4];
                    let s = c.encode_utf8(&mut buf);
                    self.buffer.extend_from_slice(s.as_bytes());
                }
            }
        }

        self.auto_flush()
    }

    /// Flush buffer to underlying writer
    pub fn flush(&mut self) -> Result<()> {
        if !self.buffer.is_empty() {
            self.writer.write_all(&self.buffer)?;
            self.buffer.clear();
        }
        self.writer.flush()?;
        Ok(())
    }

    /// Flush and return the underlying writer
    pub fn into_inner(mut self) -> Result<W> {
        self.flush()?;
        Ok(self.writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_html_writer() {
        let mut output = Vec::new();
        let mut writer = HtmlWriter::new(&mut output);

        writer.start_element("div").unwrap();
        writer.attribute("id", "root").unwrap();
        writer.attribute_int("data-count", 42).unwrap();
        writer.close_start_tag().unwrap();
        writer.write_str("content").unwrap();
        writer.end_element("div").unwrap();
        writer.flush().unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "<div id=\"root\" data-count=\"42\">content</div>"
        );
    }

    #[test]
    fn test_html_escaping() {
        let mut output = Vec::new();
        let mut writer = HtmlWriter::new(&mut output);

        writer.text_element("title", "<Tom & \"Jerry's\">").unwrap();
        writer.flush().unwrap();

        assert_eq!(
            String::from_utf8(output).unwrap(),
            "<title>&lt;Tom &amp; &quot;Jerry&#39;s&quot;&gt;</title>"
        );
    }

    #[test]
    fn test_small_capacity_flushes() {
        let mut writer = HtmlWriter::with_capacity(Vec::new(), 8);
        for _ in 0..10 {
            writer.write_str("abcdef").unwrap();
        }
        writer.write_escaped("héllo").unwrap();
        let out = writer.into_inner().unwrap();
        assert_eq!(out.len(), 60 + "héllo".len());
    }
}
