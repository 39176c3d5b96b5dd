use crate::domain::{Catalog, CatalogGame, CatalogImage, ImageQuery, ImageResource};
use crate::error::{CoverupError, Result};
use image::{DynamicImage, ImageFormat};
use std::cell::RefCell;
use std::collections::HashMap;
use std::io::{self, Cursor, Write};
use std::sync::{Arc, Mutex};
use tracing::subscriber::DefaultGuard;

/// In-memory catalog that records every call it receives.
#[derive(Default)]
pub struct FakeCatalog {
    games: HashMap<String, CatalogGame>,
    images: HashMap<(u64, ImageResource), Vec<CatalogImage>>,
    blobs: HashMap<String, Vec<u8>>,
    pub searches: RefCell<Vec<String>>,
    pub queries: RefCell<Vec<(u64, ImageQuery)>>,
    pub downloads: RefCell<Vec<String>>,
}

impl FakeCatalog {
    pub fn with_game(mut self, term: &str, id: u64, name: &str) -> Self {
        self.games.insert(
            term.to_string(),
            CatalogGame {
                id,
                name: name.to_string(),
            },
        );
        self
    }

    pub fn with_image(mut self, id: u64, resource: ImageResource, url: &str, bytes: Vec<u8>) -> Self {
        self.images.entry((id, resource)).or_default().push(CatalogImage {
            id: self.blobs.len() as u64,
            url: url.to_string(),
            ..Default::default()
        });
        self.blobs.insert(url.to_string(), bytes);
        self
    }
}

impl Catalog for FakeCatalog {
    async fn search(&self, term: &str) -> Result<Vec<CatalogGame>> {
        self.searches.borrow_mut().push(term.to_string());
        Ok(self.games.get(term).cloned().into_iter().collect())
    }

    async fn images(&self, game_id: u64, query: &ImageQuery) -> Result<Vec<CatalogImage>> {
        self.queries.borrow_mut().push((game_id, query.clone()));
        Ok(self
            .images
            .get(&(game_id, query.resource))
            .cloned()
            .unwrap_or_default())
    }

    async fn download(&self, url: &str) -> Result<Vec<u8>> {
        self.downloads.borrow_mut().push(url.to_string());
        self.blobs
            .get(url)
            .cloned()
            .ok_or_else(|| CoverupError::Api {
                status: 404,
                body: url.to_string(),
            })
    }
}

pub fn encode(image: &DynamicImage, format: ImageFormat) -> Vec<u8> {
    let mut buf = Cursor::new(Vec::new());
    image.write_to(&mut buf, format).unwrap();
    buf.into_inner()
}

pub fn jpeg(width: u32, height: u32) -> Vec<u8> {
    encode(&DynamicImage::new_rgb8(width, height), ImageFormat::Jpeg)
}

pub fn png(width: u32, height: u32) -> Vec<u8> {
    encode(&DynamicImage::new_rgba8(width, height), ImageFormat::Png)
}

/// Formatted log output collected by [`capture_logs`].
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Routes this thread's logs into a buffer until the guard is dropped.
pub fn capture_logs() -> (LogCapture, DefaultGuard) {
    let capture = LogCapture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    (capture, tracing::subscriber::set_default(subscriber))
}
