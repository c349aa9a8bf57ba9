#![no_main]
use std::cell::RefCell;

use arbitrary::{Arbitrary, Unstructured};
use libfuzzer_sys::{fuzz_mutator, fuzz_target, fuzzer_mutate};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use stringy::{
    CharUnit, Tokenizer, concat, content, copy, count_tokens, find_ci, format_into, insert, len,
    to_lower,
};

thread_local! {
    // One SmallRng per thread, seeded once from the host OS
    static RNG: RefCell<SmallRng> =
        RefCell::new(SmallRng::from_os_rng());
}

/// Bytes worth planting: terminators, common delimiters, case pairs.
static INTERESTING: &[u8] = b"\0\0,,;  aAzZ09";

/// Helper: borrow the thread-local RNG and run a closure with it.
fn with_rng<F, R>(f: F) -> R
where
    F: FnOnce(&mut SmallRng) -> R,
{
    RNG.with(|cell| f(&mut cell.borrow_mut()))
}

fn mutator(data: &mut [u8], size: usize, max_size: usize, seed: u32) -> usize {
    let size = fuzzer_mutate(data, size, max_size);
    if seed % 4 == 0 && size > 0 {
        with_rng(|rng| {
            for _ in 0..rng.random_range(1..=size.min(8)) {
                let at = rng.random_range(0..size);
                data[at] = INTERESTING[rng.random_range(0..INTERESTING.len())];
            }
        });
    }
    size
}

fuzz_mutator!(|data: &mut [u8], size: usize, max_size: usize, seed: u32| {
    mutator(data, size, max_size, seed)
});

#[derive(Debug, Arbitrary)]
enum Op {
    Copy { cap: u8 },
    Concat { cap: u8 },
    Insert { cap: u8, pos: u8 },
    Lower,
    Tokenize { delim: u8 },
    Find,
    Format { cap: u8 },
}

#[derive(Debug)]
struct Input {
    dest: Vec<u8>,
    source: Option<Vec<u8>>,
    wide: bool,
    ops: Vec<Op>,
}

impl<'a> Arbitrary<'a> for Input {
    fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut dest: Vec<u8> = u.arbitrary()?;
        // Always leave room for at least the terminator.
        dest.push(0);
        Ok(Input {
            dest,
            source: u.arbitrary()?,
            wide: u.arbitrary()?,
            ops: u.arbitrary()?,
        })
    }
}

/// `cap` folded into `1..=dest_len`.
fn capacity(cap: u8, dest_len: usize) -> usize {
    usize::from(cap) % dest_len + 1
}

fn is_terminated_within<C: CharUnit>(dest: &[C], cap: usize) -> bool {
    dest[..cap].iter().any(|c| c.is_terminator())
}

fn run<C: CharUnit>(mut dest: Vec<C>, source: Option<Vec<C>>, ops: &[Op], from_byte: fn(u8) -> C) {
    let source = source.as_deref();
    for op in ops {
        let before = dest.clone();
        match *op {
            Op::Copy { cap } => {
                let cap = capacity(cap, dest.len());
                let w = copy(&mut dest, source, cap).unwrap();
                assert!(is_terminated_within(&dest, cap));
                assert_eq!(w.len, len(&dest));
                assert_eq!(dest[cap..], before[cap..]);
            }
            Op::Concat { cap } => {
                let cap = capacity(cap, dest.len());
                let w = concat(&mut dest, source, cap).unwrap();
                assert!(is_terminated_within(&dest, cap));
                assert_eq!(w.len, len(&dest));
                assert_eq!(dest[cap..], before[cap..]);
            }
            Op::Insert { cap, pos } => {
                let cap = capacity(cap, dest.len());
                match insert(&mut dest, source, cap, usize::from(pos)) {
                    Ok(w) => {
                        assert!(is_terminated_within(&dest, cap));
                        assert_eq!(w.len, len(&dest));
                    }
                    Err(_) => assert_eq!(dest, before),
                }
                assert_eq!(dest[cap..], before[cap..]);
            }
            Op::Lower => {
                to_lower(&mut dest);
                assert_eq!(len(&dest), len(&before));
            }
            Op::Tokenize { delim } => {
                let delim = from_byte(delim);
                let expected = count_tokens(Some(&dest[..]), delim);
                let mut scratch = dest.clone();
                let produced = Tokenizer::new(&mut scratch, delim).count();
                assert_eq!(produced, expected);
            }
            Op::Find => {
                if let Some(needle) = source {
                    if let Some(at) = find_ci(&dest, needle) {
                        assert!(at + content(needle).len() <= len(&dest));
                    }
                }
            }
            Op::Format { cap } => {
                let cap = capacity(cap, dest.len());
                let w = format_into(&mut dest, cap, format_args!("{}:{ops:?}", cap)).unwrap();
                assert!(w.len < cap);
                assert!(is_terminated_within(&dest, cap));
            }
        }
    }
}

fn check(input: Input) {
    if input.wide {
        let widen = |v: &[u8]| v.iter().copied().map(u32::from).collect::<Vec<u32>>();
        run(
            widen(&input.dest),
            input.source.as_deref().map(widen),
            &input.ops,
            u32::from,
        );
    } else {
        run(input.dest, input.source, &input.ops, |b| b);
    }
}

fuzz_target!(|input: Input| check(input));
