#![no_main]

use libfuzzer_sys::fuzz_target;

use pretty_assertions::assert_eq;

use boundbox::math::{Aab, Axis, Bound, Boundary, FreeCoordinate, FreePoint};

#[derive(Debug, arbitrary::Arbitrary)]
enum Op {
    SetMin([FreeCoordinate; 3]),
    SetMax([FreeCoordinate; 3]),
    SetEdge(Axis, Bound, FreeCoordinate),
    Intersect(Aab),
    Union(Aab),
    Inflate([FreeCoordinate; 3]),
}

fuzz_target!(|input: (Aab, Vec<Op>)| {
    let (mut aab, ops) = input;
    for op in ops {
        // Operations under test only keep the corners ordered when they start out
        // ordered, and NaN has no order.
        let was_valid = aab.is_valid();
        match op {
            Op::SetMin(p) => aab.set_min(p),
            Op::SetMax(p) => aab.set_max(p),
            Op::SetEdge(axis, bound, value) => aab.set_edge(axis, bound, value),
            Op::Intersect(other) => {
                let expected = Aab::intersection(other, aab);
                if was_valid && other.is_valid() {
                    assert_eq!(expected, Aab::intersection(aab, other));
                }
                aab.intersect(other);
            }
            Op::Union(other) => {
                let union = Aab::union(aab, other);
                if was_valid && other.is_valid() {
                    for corner in aab.corner_points().chain(other.corner_points()) {
                        assert!(union.contains_point(corner, Boundary::Inclusive));
                    }
                }
                aab = union;
            }
            Op::Inflate(p) => {
                let p = FreePoint::from(p);
                aab.inflate(p);
                if was_valid && !p.x.is_nan() && !p.y.is_nan() && !p.z.is_nan() {
                    assert!(aab.contains_point(p, Boundary::Inclusive));
                }
            }
        }
        if was_valid {
            for axis in Axis::ALL {
                let (lower, upper) = (aab.min()[axis], aab.max()[axis]);
                assert!(
                    lower.is_nan() || upper.is_nan() || lower <= upper,
                    "{aab:?}"
                );
            }
        }

        // Quantization must never panic, whatever the coordinates are.
        let _ = (aab.round_to_int(), aab.ceil_to_int(), aab.floor_to_int());
    }
});
