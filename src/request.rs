use std::io;
use std::pin::Pin;
use std::task::{Context, Poll};
use bytes::Bytes;
use futures::{Stream, TryStreamExt};
use reqwest::header::RANGE;
use reqwest::{Client, Request, Response};
use tokio::io::{AsyncRead, ReadBuf};
use tokio_util::io::StreamReader;
use crate::download_configuration::DownloadConfiguration;
use crate::error::DownloadError;
use crate::progress_reader::Close;
use crate::resume_state::ResumeState;

pub fn get_download_request(
    client: &Client,
    config: &DownloadConfiguration,
    url: &str,
    state: &ResumeState,
) -> crate::error::Result<Request> {
    let mut request = client.get(url);
    if let Some(range_str) = state.range_header() {
        request = request.header(RANGE, range_str);
    }
    if let Some(timeout) = config.request_timeout(state.remaining()) {
        request = request.timeout(timeout);
    }
    request.build().map_err(|source| DownloadError::RequestCreation {
        url: url.to_string(),
        source,
    })
}

type BodyStream = Pin<Box<dyn Stream<Item = io::Result<Bytes>> + Send>>;

/// Response body as an `AsyncRead`. Closing it releases the connection;
/// reads after that see end of stream.
pub struct ResponseBody {
    reader: Option<StreamReader<BodyStream, Bytes>>,
}

impl ResponseBody {
    pub fn new(response: Response) -> ResponseBody {
        let stream: BodyStream = Box::pin(response.bytes_stream().map_err(io::Error::other));
        ResponseBody {
            reader: Some(StreamReader::new(stream)),
        }
    }
}

impl Close for ResponseBody {
    fn close(&mut self) -> io::Result<()> {
        self.reader.take();
        Ok(())
    }
}

impl AsyncRead for ResponseBody {
    fn poll_read(self: Pin<&mut Self>, cx: &mut Context<'_>, buf: &mut ReadBuf<'_>) -> Poll<io::Result<()>> {
        match self.get_mut().reader.as_mut() {
            Some(reader) => Pin::new(reader).poll_read(cx, buf),
            None => Poll::Ready(Ok(())),
        }
    }
}
