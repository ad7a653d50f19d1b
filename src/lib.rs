pub mod core;
pub mod analysis;
pub mod storage;
pub mod reader;
pub mod query;
pub mod search;
pub mod writer;
pub mod generator;
pub mod cli;

/*
┌──────────────────────────────────────────────────────────────────────────────┐
│                              TNINE DATA FLOW                                 │
└──────────────────────────────────────────────────────────────────────────────┘

   stdin / --input FILE
          │  alternating name / number lines
          ▼
  ┌──────────────────────┐
  │ reader::LineParser   │  width, digit and pairing checks, capacity
  └──────────┬───────────┘
             ▼
  ┌──────────────────────┐
  │ storage::Directory   │  Vec<Record>, fixed capacity, insertion order
  └──────────┬───────────┘
             ▼
  ┌──────────────────────┐      ┌──────────────────────────────────────┐
  │ search::QueryExecutor│─────▶│ query::RecordMatcher                 │
  │  no query → all      │      │  Anchored   contiguous, anchor scan  │
  │  -s       → Seq.     │      │  Sequential in-order subsequence     │
  │  default  → Anchored │      │  number: Literal  name: Keypad/Lit.  │
  └──────────┬───────────┘      └──────────────────┬───────────────────┘
             │                                     │
             │                          analysis::keypad (2=abc … 9=wxyz, 0=+)
             ▼
  ┌──────────────────────┐
  │ search::ResultView   │  increasing positions, no record copies
  └──────────┬───────────┘
             ▼
  ┌──────────────────────┐
  │ writer::ResultPrinter│  "name, number" lines | JSON | "Not found"
  └──────────────────────┘
*/
