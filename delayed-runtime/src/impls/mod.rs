// Copyright 2026 delayed-rs contributors
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

pub mod smol;
pub mod tokio;
