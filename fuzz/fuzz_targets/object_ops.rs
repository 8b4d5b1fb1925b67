#![no_main]

use std::collections::BTreeMap;

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sonic_var::{Object, Var};

#[derive(Arbitrary, Debug)]
enum Leaf {
    Empty,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Char(char),
    Str(String),
}

impl From<Leaf> for Var {
    fn from(leaf: Leaf) -> Self {
        match leaf {
            Leaf::Empty => Var::Empty,
            Leaf::Bool(b) => b.into(),
            Leaf::Int(i) => i.into(),
            Leaf::UInt(u) => u.into(),
            Leaf::Float(f) => f.into(),
            Leaf::Char(c) => c.into(),
            Leaf::Str(s) => s.into(),
        }
    }
}

#[derive(Arbitrary, Debug)]
enum Op {
    Set(String, Leaf),
    Remove(String),
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Input {
    insertion_order: bool,
    indent: u8,
    ops: Vec<Op>,
}

fuzz_target!(|input: Input| {
    let mut obj = Object::with_mode(input.insertion_order);
    // model: key -> first insertion sequence number
    let mut model: BTreeMap<String, usize> = BTreeMap::new();
    let mut seq = 0;

    for op in input.ops {
        match op {
            Op::Set(k, v) => {
                let had = obj.has(&k);
                let old = obj.set(&k, v);
                assert_eq!(had, old.is_some());
                if !had {
                    model.insert(k, seq);
                    seq += 1;
                }
            }
            Op::Remove(k) => {
                assert_eq!(obj.remove(&k).is_some(), model.remove(&k).is_some());
            }
            Op::Clear => {
                obj.clear();
                model.clear();
            }
        }
        assert_eq!(obj.size(), model.len());
    }

    let mut names = Vec::new();
    obj.get_names(&mut names);
    let mut expect: Vec<(&String, &usize)> = model.iter().collect();
    if input.insertion_order {
        expect.sort_by_key(|(_, seq)| **seq);
    }
    let expect: Vec<&String> = expect.into_iter().map(|(k, _)| k).collect();
    assert_eq!(names.iter().collect::<Vec<_>>(), expect);

    let text = obj.to_json_string((input.indent % 8) as usize).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
    let parsed = parsed.as_object().unwrap();
    assert_eq!(parsed.len(), obj.size());
    assert!(parsed.keys().eq(names.iter()));
});
