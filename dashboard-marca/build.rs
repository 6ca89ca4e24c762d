use std::env;
use std::fs;
use std::path::Path;

// Minimal stand-in tables so the app still builds when the survey CSVs
// are not checked out next to the workspace.
const FALLBACKS: [(&str, &str); 4] = [
    (
        "importancia_energia.csv",
        "Categoria,Ola 1,Ola 2\nMuy importante,62%,68%\nAlgo importante,24%,21%\n",
    ),
    (
        "importancia_renovables.csv",
        "Categoria,Ola 1,Ola 2\nMuy importante,55%,61%\nAlgo importante,28%,25%\n",
    ),
    (
        "conocimiento_espontaneo.csv",
        "Marca,Ola1_Total,Ola2_Total\nYPF Luz,34%,39%\nPampa Energia,22%,21%\n",
    ),
    (
        "conocimiento_guiado.csv",
        "Marca,Ola1_Total,Ola2_Total\nYPF Luz,71%,76%\nPampa Energia,64%,66%\n",
    ),
];

fn main() {
    let out_dir = env::var("OUT_DIR").unwrap();

    // Copy each chart CSV to OUT_DIR for include_str
    for (name, fallback) in FALLBACKS {
        let src = Path::new("../fixtures").join(name);
        let dest = Path::new(&out_dir).join(name);
        if src.exists() {
            fs::copy(&src, &dest).unwrap();
        } else {
            fs::write(&dest, fallback).unwrap();
        }
        println!("cargo:rerun-if-changed=../fixtures/{name}");
    }

    println!("cargo:rerun-if-changed=build.rs");
}
