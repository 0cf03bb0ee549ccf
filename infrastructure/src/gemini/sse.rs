//! Server-Sent Events reading for `streamGenerateContent?alt=sse`.
//!
//! The response body is wrapped in a [`StreamReader`] and read line by line;
//! [`SseReader`] groups `event:`/`data:` lines into one [`SseEvent`] per
//! blank-line-terminated block.

use futures::Stream;
use std::io;
use tokio::io::{AsyncBufReadExt, BufReader, Lines};
use tokio_util::bytes::Buf;
use tokio_util::io::StreamReader;

/// A single SSE event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SseEvent {
    pub event: Option<String>,
    pub data: String,
}

pub struct SseReader<S, B> {
    lines: Lines<BufReader<StreamReader<S, B>>>,
    current_event: Option<String>,
    current_data: String,
}

impl<S, B> SseReader<S, B>
where
    S: Stream<Item = io::Result<B>> + Unpin,
    B: Buf + Unpin,
{
    pub fn new(body: S) -> Self {
        Self {
            lines: BufReader::new(StreamReader::new(body)).lines(),
            current_event: None,
            current_data: String::new(),
        }
    }

    /// Next complete event, or `None` once the body is exhausted. A trailing
    /// event without a closing blank line is still returned.
    pub async fn next_event(&mut self) -> io::Result<Option<SseEvent>> {
        while let Some(line) = self.lines.next_line().await? {
            if line.is_empty() {
                if let Some(event) = self.take_event() {
                    return Ok(Some(event));
                }
                continue;
            }

            if let Some(event_type) = line.strip_prefix("event:") {
                self.current_event = Some(event_type.trim_start().to_string());
            } else if let Some(data) = line.strip_prefix("data:") {
                if !self.current_data.is_empty() {
                    self.current_data.push('\n');
                }
                self.current_data.push_str(data.strip_prefix(' ').unwrap_or(data));
            }
            // id:, retry: and comments are ignored
        }

        Ok(self.take_event())
    }

    fn take_event(&mut self) -> Option<SseEvent> {
        if self.current_data.is_empty() {
            self.current_event = None;
            return None;
        }
        Some(SseEvent {
            event: self.current_event.take(),
            data: std::mem::take(&mut self.current_data),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    async fn read_all(chunks: Vec<io::Result<&'static [u8]>>) -> io::Result<Vec<SseEvent>> {
        let mut reader = SseReader::new(stream::iter(chunks));
        let mut events = Vec::new();
        while let Some(event) = reader.next_event().await? {
            events.push(event);
        }
        Ok(events)
    }

    fn chunk(s: &'static str) -> io::Result<&'static [u8]> {
        Ok(s.as_bytes())
    }

    fn data(data: &str) -> SseEvent {
        SseEvent {
            event: None,
            data: data.to_string(),
        }
    }

    #[tokio::test]
    async fn reads_events_split_across_chunks() {
        let events = read_all(vec![
            chunk("data: {\"a\":"),
            chunk("1}\r\n\r\ndata: {\"b\":2}\n\n"),
        ])
        .await
        .unwrap();

        assert_eq!(events, vec![data("{\"a\":1}"), data("{\"b\":2}")]);
    }

    #[tokio::test]
    async fn multi_line_data_and_event_name() {
        let events = read_all(vec![chunk(
            "event: message\ndata: one\ndata: two\n: comment\n\n",
        )])
        .await
        .unwrap();

        assert_eq!(events.len(), 1);
        assert_eq!(events[0].event.as_deref(), Some("message"));
        assert_eq!(events[0].data, "one\ntwo");
    }

    #[tokio::test]
    async fn unterminated_final_event_is_returned() {
        let events = read_all(vec![chunk("data: first\n\ndata: last")])
            .await
            .unwrap();
        assert_eq!(events, vec![data("first"), data("last")]);
    }

    #[tokio::test]
    async fn multibyte_character_split_across_chunks() {
        let (head, tail) = "data: crème brûlée\n\n".as_bytes().split_at(9);
        let events = read_all(vec![Ok(head), Ok(tail)]).await.unwrap();
        assert_eq!(events, vec![data("crème brûlée")]);
    }

    #[tokio::test]
    async fn blank_lines_without_data_emit_nothing() {
        let events = read_all(vec![chunk("\n\n\n")]).await.unwrap();
        assert!(events.is_empty());
    }

    #[tokio::test]
    async fn body_error_is_surfaced() {
        let err = read_all(vec![
            chunk("data: partial\n"),
            Err(io::Error::other("connection reset")),
        ])
        .await
        .unwrap_err();
        assert_eq!(err.to_string(), "connection reset");
    }
}
