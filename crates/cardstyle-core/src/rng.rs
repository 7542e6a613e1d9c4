// Copyright 2025 Fernando Borretti
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use rand::Rng;
use rand::rngs::ThreadRng;

/// A source of choices: "pick one of `len` options".
///
/// Styling only ever needs to select an element from a fixed list, so this is
/// the whole interface. Tests swap in a deterministic implementation.
pub trait Picker {
    /// Return an index in `[0, len)`. `len` is never zero.
    fn pick(&mut self, len: usize) -> usize;
}

/// Choose one element of a non-empty slice.
pub fn choose<'a, T>(picker: &mut dyn Picker, options: &'a [T]) -> &'a T {
    let index = picker.pick(options.len());
    &options[index % options.len()]
}

impl Picker for ThreadRng {
    fn pick(&mut self, len: usize) -> usize {
        self.gen_range(0..len)
    }
}

/// A minimal, completely insecure PRNG for reproducible styling.
pub struct TinyRng {
    state: u64,
}

const A: u64 = 6364136223846793005;
const C: u64 = 1442695040888963407;

impl TinyRng {
    /// Initialize the RNG from a seed.
    pub fn from_seed(seed: u64) -> Self {
        Self { state: seed }
    }

    fn next_u32(&mut self) -> u32 {
        let new = self.state.wrapping_mul(A).wrapping_add(C);
        self.state = new;
        (new >> 32) as u32
    }

    // Generate random number in range [0, max).
    fn generate(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

impl Picker for TinyRng {
    fn pick(&mut self, len: usize) -> usize {
        self.generate(len as u32) as usize
    }
}
