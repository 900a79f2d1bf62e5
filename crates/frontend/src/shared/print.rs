//! Print flow
//!
//! One POST to the print proxy; on success the returned document URL is
//! opened in a new browser context, otherwise an error toast is shown.

use async_trait::async_trait;
use contracts::shared::document::{PrintRequest, PrintResponse, PrintTarget};
use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api_utils::api_url;
use super::graphql::ApiError;
use super::toast::{use_toasts, Notifier};
use crate::layout::global_context::use_app_state;

/// Status and body of a print endpoint response
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrintReply {
    pub status: u16,
    pub body: PrintResponse,
}

#[async_trait(?Send)]
pub trait PrintTransport {
    async fn post(&self, route: &str, request: &PrintRequest) -> Result<PrintReply, ApiError>;
}

pub trait WindowOpener {
    fn open(&self, url: &str) -> Result<(), String>;
}

pub struct HttpPrintTransport {
    access_token: Option<String>,
}

impl HttpPrintTransport {
    pub fn new(access_token: Option<String>) -> Self {
        Self { access_token }
    }
}

#[async_trait(?Send)]
impl PrintTransport for HttpPrintTransport {
    async fn post(&self, route: &str, request: &PrintRequest) -> Result<PrintReply, ApiError> {
        let mut builder = Request::post(&api_url(route));
        if let Some(token) = &self.access_token {
            builder = builder.header("Authorization", &format!("Bearer {}", token));
        }
        let response = builder
            .json(request)
            .map_err(|e| ApiError::Network(format!("failed to serialize request: {}", e)))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        let status = response.status();
        // error bodies may be empty or plain text
        let body = response.json::<PrintResponse>().await.unwrap_or_default();
        Ok(PrintReply { status, body })
    }
}

pub struct BrowserWindow;

impl WindowOpener for BrowserWindow {
    fn open(&self, url: &str) -> Result<(), String> {
        let window = web_sys::window().ok_or_else(|| "window is not available".to_string())?;
        match window.open_with_url_and_target(url, "_blank") {
            Ok(Some(_)) => Ok(()),
            Ok(None) => Err("the browser blocked the new window".to_string()),
            Err(e) => Err(format!("{:?}", e)),
        }
    }
}

/// Print `target` for `request.id`. Errors are reported through `notifier`
/// and returned as text.
pub async fn print_document(
    transport: &dyn PrintTransport,
    opener: &dyn WindowOpener,
    notifier: &dyn Notifier,
    target: PrintTarget,
    request: PrintRequest,
) -> Result<String, String> {
    let fail = |message: String| {
        notifier.error(message.clone());
        Err(message)
    };

    if request.copies == 0 {
        return fail("Number of copies must be at least 1".to_string());
    }

    let reply = match transport.post(target.route(), &request).await {
        Ok(reply) => reply,
        Err(e) => return fail(format!("Print failed: {}", e)),
    };

    if !(200..300).contains(&reply.status) {
        let detail = reply
            .body
            .message
            .unwrap_or_else(|| format!("status {}", reply.status));
        return fail(format!("Print failed: {}", detail));
    }

    let Some(url) = reply.body.url else {
        return fail("Print failed: no document was returned".to_string());
    };

    log::info!("opening {} for {}", url, target.document_name());
    if let Err(e) = opener.open(&url) {
        return fail(format!("Could not open the document: {}", e));
    }
    Ok(url)
}

/// Button + copies dialog printing `target` for the entity `id`
#[component]
pub fn PrintButton(target: PrintTarget, #[prop(into)] id: Signal<String>) -> impl IntoView {
    let app_state = use_app_state();
    let toasts = use_toasts();
    let open = RwSignal::new(false);
    let copies = RwSignal::new("1".to_string());
    let busy = RwSignal::new(false);

    let submit = move |_| {
        let parsed = copies.get_untracked().trim().parse::<u32>().unwrap_or(0);
        let request = PrintRequest {
            id: id.get_untracked(),
            copies: parsed,
        };
        open.set(false);
        busy.set(true);
        spawn_local(async move {
            let transport = HttpPrintTransport::new(app_state.access_token());
            let _ = print_document(&transport, &BrowserWindow, &toasts, target, request).await;
            busy.set(false);
        });
    };

    view! {
        <Button
            size=ButtonSize::Small
            on_click=move |_| open.set(true)
            disabled=Signal::derive(move || busy.get())
        >
            "Print"
        </Button>
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>"Print"</DialogTitle>
                    <DialogContent>
                        <Flex vertical=true gap=FlexGap::Small>
                            <Label>"Copies"</Label>
                            <Input value=copies input_type=InputType::Number />
                        </Flex>
                    </DialogContent>
                    <DialogActions>
                        <Button appearance=ButtonAppearance::Primary on_click=submit>
                            "Print"
                        </Button>
                        <Button appearance=ButtonAppearance::Subtle on_click=move |_| open.set(false)>
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::toast::testing::RecordingNotifier;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct MockEndpoint {
        reply: Result<PrintReply, ApiError>,
        posts: RefCell<Vec<(String, PrintRequest)>>,
    }

    impl MockEndpoint {
        fn returning(status: u16, body: PrintResponse) -> Self {
            Self {
                reply: Ok(PrintReply { status, body }),
                posts: RefCell::new(Vec::new()),
            }
        }
    }

    #[async_trait(?Send)]
    impl PrintTransport for MockEndpoint {
        async fn post(&self, route: &str, request: &PrintRequest) -> Result<PrintReply, ApiError> {
            self.posts
                .borrow_mut()
                .push((route.to_string(), request.clone()));
            self.reply.clone()
        }
    }

    #[derive(Default)]
    struct MockWindow {
        opened: RefCell<Vec<String>>,
    }

    impl WindowOpener for MockWindow {
        fn open(&self, url: &str) -> Result<(), String> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    fn barcode_request() -> PrintRequest {
        PrintRequest {
            id: "abc123".into(),
            copies: 3,
        }
    }

    #[test]
    fn test_print_barcode_label_opens_document() {
        let endpoint = MockEndpoint::returning(
            200,
            PrintResponse {
                url: Some("https://x/doc.pdf".into()),
                message: None,
            },
        );
        let window = MockWindow::default();
        let toasts = RecordingNotifier::default();

        let result = block_on(print_document(
            &endpoint,
            &window,
            &toasts,
            PrintTarget::BarcodeLabel,
            barcode_request(),
        ));

        assert_eq!(result, Ok("https://x/doc.pdf".to_string()));
        assert_eq!(
            *endpoint.posts.borrow(),
            vec![("/api/barcodes/print/label".to_string(), barcode_request())]
        );
        assert_eq!(*window.opened.borrow(), vec!["https://x/doc.pdf".to_string()]);
        assert!(toasts.errors().is_empty());
    }

    #[test]
    fn test_missing_url_shows_error_and_opens_nothing() {
        let endpoint = MockEndpoint::returning(200, PrintResponse::default());
        let window = MockWindow::default();
        let toasts = RecordingNotifier::default();

        let result = block_on(print_document(
            &endpoint,
            &window,
            &toasts,
            PrintTarget::BarcodeLabel,
            barcode_request(),
        ));

        assert!(result.is_err());
        assert_eq!(endpoint.posts.borrow().len(), 1);
        assert!(window.opened.borrow().is_empty());
        assert_eq!(toasts.errors().len(), 1);
    }

    #[test]
    fn test_error_status_uses_server_message() {
        let endpoint = MockEndpoint::returning(
            404,
            PrintResponse {
                url: Some("https://ignored".into()),
                message: Some("template barcode_label does not exist".into()),
            },
        );
        let window = MockWindow::default();
        let toasts = RecordingNotifier::default();

        let result = block_on(print_document(
            &endpoint,
            &window,
            &toasts,
            PrintTarget::BarcodeLabel,
            barcode_request(),
        ));

        assert_eq!(
            result,
            Err("Print failed: template barcode_label does not exist".to_string())
        );
        assert!(window.opened.borrow().is_empty());
        assert_eq!(toasts.errors().len(), 1);
    }

    #[test]
    fn test_network_error_and_zero_copies() {
        let endpoint = MockEndpoint {
            reply: Err(ApiError::Network("offline".into())),
            posts: RefCell::new(Vec::new()),
        };
        let window = MockWindow::default();
        let toasts = RecordingNotifier::default();

        let zero = PrintRequest {
            id: "abc123".into(),
            copies: 0,
        };
        assert!(block_on(print_document(&endpoint, &window, &toasts, PrintTarget::DeliveryLabel, zero)).is_err());
        assert!(endpoint.posts.borrow().is_empty(), "validation happens before the request");

        assert!(block_on(print_document(
            &endpoint,
            &window,
            &toasts,
            PrintTarget::DeliveryLabel,
            barcode_request()
        ))
        .is_err());
        assert_eq!(endpoint.posts.borrow()[0].0, "/api/deliveries/print/label");
        assert_eq!(toasts.errors().len(), 2);
        assert!(window.opened.borrow().is_empty());
    }
}
