//! テスト用モックトランスポート

use super::*;
use std::collections::{HashMap, VecDeque};
use std::sync::Mutex;

/// テスト用モックトランスポート
///
/// パス別の応答が登録されていればそれを、なければキューの先頭を返す。
/// 受け取ったリクエストはすべて記録する。
pub struct MockTransport {
    queue: Mutex<VecDeque<Response>>,
    by_path: Mutex<HashMap<String, Response>>,
    requests: Mutex<Vec<Request>>,
    delay: Option<std::time::Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            queue: Mutex::new(VecDeque::new()),
            by_path: Mutex::new(HashMap::new()),
            requests: Mutex::new(Vec::new()),
            delay: None,
        }
    }

    /// 応答までの遅延を設定
    pub fn with_delay(mut self, delay: std::time::Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// 応答をキューに追加
    pub fn push(&self, response: Response) {
        self.queue.lock().unwrap().push_back(response);
    }

    /// JSON応答をキューに追加
    pub fn push_json(&self, status: u16, body: &str) {
        self.push(Response::json(status, body));
    }

    /// パス固定の応答を登録
    pub fn respond_to(&self, path: &str, response: Response) {
        self.by_path
            .lock()
            .unwrap()
            .insert(path.to_string(), response);
    }

    /// 記録済みリクエスト
    pub fn requests(&self) -> Vec<Request> {
        self.requests.lock().unwrap().clone()
    }

    /// 最後に受け取ったリクエスト
    pub fn last_request(&self) -> Option<Request> {
        self.requests.lock().unwrap().last().cloned()
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn send<'a>(
        &'a self,
        request: Request,
    ) -> Pin<Box<dyn Future<Output = Result<Response, TransportError>> + Send + 'a>> {
        Box::pin(async move {
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }

            let fixed = self.by_path.lock().unwrap().get(&request.path).cloned();
            let response = match fixed {
                Some(response) => response,
                None => self
                    .queue
                    .lock()
                    .unwrap()
                    .pop_front()
                    .unwrap_or_else(|| panic!("no mock response for {}", request.path)),
            };

            self.requests.lock().unwrap().push(request);
            Ok(response)
        })
    }
}
