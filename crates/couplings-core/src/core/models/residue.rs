use phf::phf_map;

/// One-letter amino-acid codes for the twenty standard residues.
static RESIDUE_NAMES: phf::Map<char, &'static str> = phf_map! {
    'A' => "Alanine",
    'R' => "Arginine",
    'N' => "Asparagine",
    'D' => "Aspartic Acid",
    'C' => "Cysteine",
    'E' => "Glutamic Acid",
    'Q' => "Glutamine",
    'G' => "Glycine",
    'H' => "Histidine",
    'I' => "Isoleucine",
    'L' => "Leucine",
    'K' => "Lysine",
    'M' => "Methionine",
    'F' => "Phenylalanine",
    'P' => "Proline",
    'S' => "Serine",
    'T' => "Threonine",
    'W' => "Tryptophan",
    'Y' => "Tyrosine",
    'V' => "Valine",
};

pub fn is_standard_code(code: char) -> bool {
    RESIDUE_NAMES.contains_key(&code)
}

pub fn full_name(code: char) -> Option<&'static str> {
    RESIDUE_NAMES.get(&code).copied()
}
