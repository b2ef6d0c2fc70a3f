//! Opening line data.
//!
//! Each line is a named move sequence in the engine's notation. Moves that
//! need a disambiguation character ("Ngf3") appear only as the final move
//! of a line: the codec never emits disambiguation when recording history,
//! so a disambiguated move mid-line would break further prefix matching.

/// A named opening line.
pub struct Line {
    pub name: &'static str,
    pub moves: &'static [&'static str],
}

pub const OPENING_LINES: &[Line] = &[
    Line {
        name: "Ruy Lopez, Morphy Defence",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Ba4", "Nf6", "O-O"],
    },
    Line {
        name: "Ruy Lopez, Exchange Variation",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "a6", "Bxc6"],
    },
    Line {
        name: "Ruy Lopez, Berlin Defence",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bb5", "Nf6", "O-O"],
    },
    Line {
        name: "Italian Game, Giuoco Piano",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Bc5", "c3", "Nf6", "d3"],
    },
    Line {
        name: "Italian Game, Two Knights Defence",
        moves: &["e4", "e5", "Nf3", "Nc6", "Bc4", "Nf6", "d3"],
    },
    Line {
        name: "Scotch Game",
        moves: &["e4", "e5", "Nf3", "Nc6", "d4", "xd4", "Nxd4"],
    },
    Line {
        name: "Sicilian Defence, Najdorf Variation",
        moves: &["e4", "c5", "Nf3", "d6", "d4", "xd4", "Nxd4", "Nf6", "Nc3", "a6"],
    },
    Line {
        name: "Sicilian Defence, Dragon Variation",
        moves: &["e4", "c5", "Nf3", "d6", "d4", "xd4", "Nxd4", "Nf6", "Nc3", "g6"],
    },
    Line {
        name: "French Defence, Classical Variation",
        moves: &["e4", "e6", "d4", "d5", "Nc3", "Nf6"],
    },
    Line {
        name: "French Defence, Advance Variation",
        moves: &["e4", "e6", "d4", "d5", "e5", "c5", "c3"],
    },
    Line {
        name: "Caro-Kann Defence, Classical Variation",
        moves: &["e4", "c6", "d4", "d5", "Nc3", "xe4", "Nxe4", "Bf5"],
    },
    Line {
        name: "Scandinavian Defence",
        moves: &["e4", "d5", "xd5", "Qxd5", "Nc3", "Qa5"],
    },
    Line {
        name: "Pirc Defence",
        moves: &["e4", "d6", "d4", "Nf6", "Nc3", "g6"],
    },
    Line {
        name: "Queen's Gambit Declined",
        moves: &["d4", "d5", "c4", "e6", "Nc3", "Nf6", "Bg5", "Be7"],
    },
    Line {
        name: "Queen's Gambit Accepted",
        moves: &["d4", "d5", "c4", "xc4", "Nf3", "Nf6", "e3", "e6", "Bxc4"],
    },
    Line {
        name: "Slav Defence",
        moves: &["d4", "d5", "c4", "c6", "Nf3", "Nf6", "Nc3"],
    },
    Line {
        name: "King's Indian Defence",
        moves: &["d4", "Nf6", "c4", "g6", "Nc3", "Bg7", "e4", "d6"],
    },
    Line {
        name: "Nimzo-Indian Defence",
        moves: &["d4", "Nf6", "c4", "e6", "Nc3", "Bb4"],
    },
    Line {
        name: "London System",
        moves: &["d4", "d5", "Bf4", "Nf6", "e3", "e6", "Nd2", "c5", "Ngf3"],
    },
    Line {
        name: "English Opening, Reversed Sicilian",
        moves: &["c4", "e5", "Nc3", "Nf6", "g3", "d5", "xd5", "Nxd5", "Bg2"],
    },
];
