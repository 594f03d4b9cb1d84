// WASM bindings for the word-chain solver.
//
// Provides a `WasmWordChain` class exported via wasm-bindgen that wraps the
// `WordChain` handle from wordchain-solver. Solutions and move checks are
// serialized to plain JavaScript objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   const chain = new WasmWordChain(words, { minOverlap: 2, maxSteps: 8 });
//   chain.solve("STONE", "LAND");         // => { chain: [...], steps: 3, characters: 12, ... } or null
//   chain.isValidMove("STONE", "ONEWAY"); // => { valid: true, overlap: 3 }
//   chain.dailyPair("2025-01-01");        // => { startWord: "...", targetWord: "..." }
//   fusedLength([{ word: "STONE", overlap: 0 }, { word: "ONEWAY", overlap: 3 }]); // => 8

use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use wordchain_solver::daily::{DAILY_OPTIONS, STARTER_WORDS};
use wordchain_solver::{
    ChainLink, ChainOptions, DailyPair, MoveValidation, Segment, Solution, SolveError, WordChain,
};

// ============================================================================
// Serde-serializable DTO types for JS interop
// ============================================================================

/// Options object accepted by the constructor. Missing keys keep the defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct JsOptions {
    min_overlap: Option<usize>,
    min_word_length: Option<usize>,
    max_word_length: Option<usize>,
    max_steps: Option<usize>,
    allow_reuse: Option<bool>,
}

impl JsOptions {
    fn into_options(self) -> ChainOptions {
        let defaults = ChainOptions::default();
        ChainOptions {
            min_overlap: self.min_overlap.unwrap_or(defaults.min_overlap),
            min_word_length: self.min_word_length.unwrap_or(defaults.min_word_length),
            max_word_length: self.max_word_length,
            max_steps: self.max_steps,
            allow_reuse: self.allow_reuse.unwrap_or(defaults.allow_reuse),
        }
    }
}

/// Serializable representation of one chain link.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct JsLink {
    word: String,
    #[serde(default)]
    overlap: usize,
}

/// Serializable representation of a fused-string segment.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSegment {
    text: String,
    is_overlap: bool,
    word_index: usize,
}

/// Serializable representation of a solution.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsSolution {
    chain: Vec<JsLink>,
    steps: usize,
    characters: usize,
    fused: String,
    segments: Vec<JsSegment>,
}

/// Serializable representation of a move check.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsMoveValidation {
    valid: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    overlap: Option<usize>,
}

/// Serializable representation of a daily pair.
#[derive(Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
struct JsDailyPair {
    start_word: String,
    target_word: String,
}

// ============================================================================
// Conversion helpers
// ============================================================================

fn segment_to_js(segment: Segment) -> JsSegment {
    JsSegment {
        text: segment.text,
        is_overlap: segment.is_overlap,
        word_index: segment.word_index,
    }
}

fn solution_to_js(solution: Solution) -> JsSolution {
    let fused = solution.fused();
    let segments = wordchain_solver::fused_segments(&solution.chain)
        .into_iter()
        .map(segment_to_js)
        .collect();
    JsSolution {
        chain: solution
            .chain
            .into_iter()
            .map(|link| JsLink {
                word: link.word,
                overlap: link.overlap,
            })
            .collect(),
        steps: solution.steps,
        characters: solution.characters,
        fused,
        segments,
    }
}

fn validation_to_js(result: MoveValidation) -> JsMoveValidation {
    JsMoveValidation {
        valid: result.valid,
        reason: result.reason_text().map(str::to_string),
        overlap: result.overlap,
    }
}

fn pair_to_js(pair: DailyPair) -> JsDailyPair {
    JsDailyPair {
        start_word: pair.start,
        target_word: pair.target,
    }
}

fn links_from_js(links: Vec<JsLink>) -> Vec<ChainLink> {
    links
        .into_iter()
        .map(|link| ChainLink::new(link.word, link.overlap))
        .collect()
}

/// `None` for a failed search, an error for unusable input.
fn solve_result_to_js(result: Result<Solution, SolveError>) -> Result<Option<JsSolution>, SolveError> {
    match result {
        Ok(solution) => Ok(Some(solution_to_js(solution))),
        Err(SolveError::NoSolution { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

fn to_js<T: Serialize>(value: &T) -> Result<JsValue, JsError> {
    serde_wasm_bindgen::to_value(value).map_err(|e| JsError::new(&e.to_string()))
}

fn from_js<T: for<'de> Deserialize<'de>>(value: JsValue) -> Result<T, JsError> {
    serde_wasm_bindgen::from_value(value).map_err(|e| JsError::new(&e.to_string()))
}

// ============================================================================
// WasmWordChain
// ============================================================================

/// Word-chain solver for WebAssembly.
#[wasm_bindgen]
pub struct WasmWordChain {
    handle: WordChain,
}

#[wasm_bindgen]
impl WasmWordChain {
    /// Create a solver over `words`.
    ///
    /// `options` is an optional object with `minOverlap`, `minWordLength`,
    /// `maxWordLength`, `maxSteps` and `allowReuse`.
    #[wasm_bindgen(constructor)]
    pub fn new(words: Vec<String>, options: JsValue) -> Result<WasmWordChain, JsError> {
        let options = if options.is_undefined() || options.is_null() {
            ChainOptions::default()
        } else {
            from_js::<JsOptions>(options)?.into_options()
        };
        options
            .validate()
            .map_err(|e| JsError::new(&e.to_string()))?;
        Ok(WasmWordChain {
            handle: WordChain::with_options(words, options),
        })
    }

    /// Find the best chain from `start` to `end`.
    ///
    /// Returns `null` when no chain exists and throws when either word has
    /// no letters.
    pub fn solve(&self, start: &str, end: &str) -> Result<JsValue, JsError> {
        match solve_result_to_js(self.handle.solve(start, end)) {
            Ok(Some(solution)) => to_js(&solution),
            Ok(None) => Ok(JsValue::NULL),
            Err(e) => Err(JsError::new(&e.to_string())),
        }
    }

    /// Check whether `next` may follow `prev`.
    ///
    /// Returns `{ valid, reason?, overlap? }`.
    #[wasm_bindgen(js_name = "isValidMove")]
    pub fn is_valid_move(&self, prev: &str, next: &str) -> Result<JsValue, JsError> {
        to_js(&validation_to_js(self.handle.is_valid_move(prev, next)))
    }

    /// Pick the day's pair from this solver's dictionary, or `null`.
    #[wasm_bindgen(js_name = "dailyPair")]
    pub fn daily_pair(&self, date_id: &str) -> Result<JsValue, JsError> {
        match self.handle.daily_pair(date_id) {
            Some(pair) => to_js(&pair_to_js(pair)),
            None => Ok(JsValue::NULL),
        }
    }

    // =========================================================================
    // Option setters
    // =========================================================================

    #[wasm_bindgen(js_name = "setMinOverlap")]
    pub fn set_min_overlap(&mut self, value: usize) {
        self.handle.set_min_overlap(value);
    }

    #[wasm_bindgen(js_name = "setMinWordLength")]
    pub fn set_min_word_length(&mut self, value: usize) {
        self.handle.set_min_word_length(value);
    }

    #[wasm_bindgen(js_name = "setMaxWordLength")]
    pub fn set_max_word_length(&mut self, value: Option<usize>) {
        self.handle.set_max_word_length(value);
    }

    #[wasm_bindgen(js_name = "setMaxSteps")]
    pub fn set_max_steps(&mut self, value: Option<usize>) {
        self.handle.set_max_steps(value);
    }

    #[wasm_bindgen(js_name = "setAllowReuse")]
    pub fn set_allow_reuse(&mut self, value: bool) {
        self.handle.set_allow_reuse(value);
    }
}

// ============================================================================
// Free functions
// ============================================================================

/// Fused character count of a chain of `{ word, overlap }` objects.
#[wasm_bindgen(js_name = "fusedLength")]
pub fn fused_length(chain: JsValue) -> Result<usize, JsError> {
    let links: Vec<JsLink> = from_js(chain)?;
    Ok(wordchain_solver::fused_length(&links_from_js(links)))
}

/// Display segments of a chain of `{ word, overlap }` objects.
#[wasm_bindgen(js_name = "fusedSegments")]
pub fn fused_segments(chain: JsValue) -> Result<JsValue, JsError> {
    let links: Vec<JsLink> = from_js(chain)?;
    let segments: Vec<JsSegment> = wordchain_solver::fused_segments(&links_from_js(links))
        .into_iter()
        .map(segment_to_js)
        .collect();
    to_js(&segments)
}

/// The built-in daily word pool.
#[wasm_bindgen(js_name = "starterWords")]
pub fn starter_words() -> js_sys::Array {
    STARTER_WORDS.iter().map(|w| JsValue::from_str(w)).collect()
}

/// Pick the day's pair from the built-in pool and solve it with the daily
/// options. Returns `{ startWord, targetWord, solution }` where `solution`
/// is `null` when no chain exists within the step limit.
#[wasm_bindgen(js_name = "dailyPuzzle")]
pub fn daily_puzzle(date_id: &str) -> Result<JsValue, JsError> {
    #[derive(Serialize)]
    #[serde(rename_all = "camelCase")]
    struct JsDailyPuzzle {
        #[serde(flatten)]
        pair: JsDailyPair,
        solution: Option<JsSolution>,
    }

    let pair = wordchain_solver::daily_pair(date_id, STARTER_WORDS)
        .ok_or_else(|| JsError::new("starter word list has fewer than two words"))?;
    let handle = WordChain::with_options(STARTER_WORDS, DAILY_OPTIONS);
    let solution = solve_result_to_js(handle.solve(&pair.start, &pair.target))
        .map_err(|e| JsError::new(&e.to_string()))?;
    to_js(&JsDailyPuzzle {
        pair: pair_to_js(pair),
        solution,
    })
}
