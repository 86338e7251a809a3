use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use scraper::{ElementRef, Html, Node};
use time::Date;
use tracing::{debug, info, warn};

use crate::config::FetchConfig;
use crate::domain::{FieldLabel, FieldValue};
use crate::error::{DocumentError, FetchError, FieldError, RetrievalError};
use crate::http_client::{HttpClient, HttpRequest, HttpResponse};
use crate::retriever::Retriever;
use crate::LiveBondData;

const UPSTREAM: &str = "bond page";

/// Class prefix of the right-aligned cells that hold field values.
pub const VALUE_CELL_CLASS_PREFIX: &str = "t-text -right";

/// Scrapes bond market data from an investor-relations HTML page.
///
/// The page is read as a sequence of label texts, each followed somewhere later
/// in document order by a value cell. See [`extract_fields`] for the exact
/// pairing rule.
#[derive(Clone)]
pub struct BondPageExtractor {
    http_client: Arc<dyn HttpClient>,
    timeout_ms: u64,
}

impl BondPageExtractor {
    pub fn new(http_client: Arc<dyn HttpClient>, config: &FetchConfig) -> Self {
        Self {
            http_client,
            timeout_ms: config.timeout_ms,
        }
    }

    async fn fetch(&self, url: &str) -> Result<LiveBondData, FetchError> {
        if url.trim().is_empty() {
            return Err(RetrievalError::EmptyIdentifier.into());
        }
        debug!(%url, "requesting bond page");

        let request = HttpRequest::get(url)
            .with_header("accept", "text/html")
            .with_timeout_ms(self.timeout_ms);

        let response = self
            .http_client
            .execute(request)
            .await
            .map_err(|cause| {
                warn!(%url, error = %cause, "bond page request failed");
                RetrievalError::Transport {
                    upstream: UPSTREAM,
                    cause,
                }
            })?;

        if !response.is_ok() {
            warn!(%url, status = response.status, "bond page request rejected");
            return Err(RetrievalError::Status {
                upstream: UPSTREAM,
                status: response.status,
            }
            .into());
        }

        let data = parse_bond_page(&response)?;
        info!(
            url = %data.source_url,
            currency = %data.currency,
            last_price = data.last_price,
            "bond data retrieved"
        );
        Ok(data)
    }
}

impl Retriever for BondPageExtractor {
    type Output = LiveBondData;

    fn name(&self) -> &'static str {
        UPSTREAM
    }

    fn retrieve<'a>(
        &'a self,
        identifier: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<LiveBondData, FetchError>> + Send + 'a>> {
        Box::pin(self.fetch(identifier))
    }
}

/// Parse a successful bond page response into validated bond data.
///
/// Invalid UTF-8 sequences are replaced, never rejected. The document tree only
/// lives inside this call, never across an await.
pub fn parse_bond_page(response: &HttpResponse) -> Result<LiveBondData, FetchError> {
    let text = response.text_lossy();
    if text.trim().is_empty() {
        return Err(DocumentError::EmptyBody.into());
    }
    let document = Html::parse_document(&text);

    let fields = extract_fields(&document).map_err(RetrievalError::from)?;
    Ok(fields.into_live_data(&response.final_url)?)
}

/// Values collected during one walk of a bond page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedFields {
    pub currency: String,
    pub last_price: f64,
    pub next_coupon_rate: f64,
    pub maturity: Option<Date>,
}

impl ExtractedFields {
    fn record(&mut self, label: FieldLabel, value: FieldValue) {
        match (label, value) {
            (FieldLabel::TradingCurrency, FieldValue::Text(currency)) => self.currency = currency,
            (FieldLabel::ClosePrice, FieldValue::Number(price)) => self.last_price = price,
            (FieldLabel::CurrentCouponRate, FieldValue::Number(rate)) => {
                self.next_coupon_rate = rate
            }
            (FieldLabel::Maturity, FieldValue::Date(maturity)) => self.maturity = Some(maturity),
            // FieldLabel::coerce never pairs a label with another value type.
            _ => {}
        }
    }

    /// Whether both mandatory fields were found.
    pub fn is_complete(&self) -> bool {
        !self.currency.is_empty() && self.last_price != 0.0
    }

    fn into_live_data(self, source_url: &str) -> Result<LiveBondData, RetrievalError> {
        if !self.is_complete() {
            return Err(RetrievalError::IncompleteData {
                url: source_url.to_owned(),
            });
        }

        Ok(LiveBondData {
            currency: self.currency,
            last_price: self.last_price,
            next_coupon_rate: self.next_coupon_rate,
            maturity: self.maturity,
            source_url: source_url.to_owned(),
        })
    }
}

/// Walk `document` depth-first, parents before children, pairing labels with
/// value cells.
///
/// - A text node matching a [`FieldLabel`] makes that label pending, replacing
///   any label still pending.
/// - A `span` whose class starts with [`VALUE_CELL_CLASS_PREFIX`], met while a
///   label is pending, supplies that label's value from its first text and
///   clears the pending label. Value cells met with nothing pending are inert.
///
/// A value that does not coerce aborts the walk.
pub fn extract_fields(document: &Html) -> Result<ExtractedFields, FieldError> {
    let mut fields = ExtractedFields::default();
    walk(document.root_element(), None, &mut fields)?;
    Ok(fields)
}

fn walk(
    element: ElementRef<'_>,
    pending: Option<FieldLabel>,
    fields: &mut ExtractedFields,
) -> Result<Option<FieldLabel>, FieldError> {
    let mut pending = pending;

    if let Some(label) = pending {
        if is_value_cell(element) {
            let raw = element.text().next().unwrap_or_default();
            let value = label.coerce(raw)?;
            debug!(field = %label, value = raw.trim(), "extracted bond field");
            fields.record(label, value);
            pending = None;
        }
    }

    for child in element.children() {
        match child.value() {
            Node::Text(text) => {
                if let Some(label) = FieldLabel::from_text(text) {
                    pending = Some(label);
                }
            }
            Node::Element(_) => {
                if let Some(child) = ElementRef::wrap(child) {
                    pending = walk(child, pending, fields)?;
                }
            }
            _ => {}
        }
    }

    Ok(pending)
}

fn is_value_cell(element: ElementRef<'_>) -> bool {
    let value = element.value();
    value.name() == "span"
        && value
            .attr("class")
            .is_some_and(|class| class.starts_with(VALUE_CELL_CLASS_PREFIX))
}
