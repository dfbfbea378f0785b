// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Captures log events in unit tests.

use std::sync::{Arc, Mutex};
use tracing::{Level, Subscriber, field, span};

/// A captured event: its level and the formatted message.
#[derive(Clone, Debug, PartialEq)]
pub struct CapturedEvent {
    pub level: Level,
    pub message: String,
}

#[derive(Clone, Debug)]
pub struct CaptureEvents {
    captured: Arc<Mutex<Vec<CapturedEvent>>>,
}

impl CaptureEvents {
    pub fn new() -> Self {
        Self {
            captured: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn events(&self) -> Vec<CapturedEvent> {
        self.captured.lock().expect("never poisoned").clone()
    }

    /// The messages logged at `level`, in order.
    pub fn messages(&self, level: Level) -> Vec<String> {
        self.events()
            .into_iter()
            .filter(|e| e.level == level)
            .map(|e| e.message)
            .collect()
    }
}

struct MessageVisitor<'a>(&'a mut String);

impl field::Visit for MessageVisitor<'_> {
    fn record_debug(&mut self, field: &field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{value:?}");
        }
    }
}

impl Subscriber for CaptureEvents {
    fn enabled(&self, metadata: &tracing::Metadata<'_>) -> bool {
        metadata.is_event() && *metadata.level() <= Level::INFO
    }
    fn event(&self, event: &tracing::Event<'_>) {
        let mut message = String::new();
        event.record(&mut MessageVisitor(&mut message));
        let mut guard = self.captured.lock().expect("never poisoned");
        guard.push(CapturedEvent {
            level: *event.metadata().level(),
            message,
        });
    }
    fn new_span(&self, _span: &span::Attributes<'_>) -> span::Id {
        unimplemented!("not interested in spans")
    }
    fn record(&self, _span: &span::Id, _values: &span::Record<'_>) {
        unimplemented!("not interested in spans")
    }
    fn record_follows_from(&self, _span: &span::Id, _follows: &span::Id) {
        unimplemented!("not interested in spans")
    }
    fn enter(&self, _span: &span::Id) {
        unimplemented!("not interested in spans")
    }
    fn exit(&self, _span: &span::Id) {
        unimplemented!("not interested in spans")
    }
}
