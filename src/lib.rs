pub mod core;
pub mod analysis;
pub mod index;
pub mod query;

/*
┌──────────────────────────── TABDEX ARCHITECTURE ────────────────────────────┐
│                                                                             │
│   tab-separated file                                                        │
│        │                                                                    │
│        ▼                                                                    │
│   IndexBuilder (index/builder.rs)                                           │
│        │  one linear pass, per-record token de-duplication                  │
│        │  uses Tokenizer (analysis/tokenizer.rs)                            │
│        ▼                                                                    │
│   InvertedIndex (index/inverted.rs)                                         │
│        │  postings: HashMap<String, PostingList>   (index/posting.rs)       │
│        │  records:  Vec<Record>                    (core/types.rs)          │
│        │  immutable after build, shared via Arc                             │
│        ▼                                                                    │
│   QueryProcessor (query/processor.rs)                                       │
│        │  boolean AND: lookup, length-sort, linear-merge intersection       │
│        ▼                                                                    │
│   Vec<RecordId>  ──►  caller formats via InvertedIndex::record()            │
│                                                                             │
└─────────────────────────────────────────────────────────────────────────────┘
*/
