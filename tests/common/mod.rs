use std::fs;
use std::io;
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

pub const MATRIX_REL: &str = "1kgp_out/rs41_GT_matrix_with_refalt.tsv";
pub const PANEL_REL: &str = "hirisplexs.csv";
pub const OUTPUT_REL: &str = "1kgp_out/hirisplex_by_sample_refaware.csv";

static NEXT_ID: AtomicUsize = AtomicUsize::new(0);

pub struct Dataset {
    pub work_dir: PathBuf,
}

impl Dataset {
    pub fn matrix(&self) -> PathBuf {
        self.work_dir.join(MATRIX_REL)
    }

    pub fn panel(&self) -> PathBuf {
        self.work_dir.join(PANEL_REL)
    }

    pub fn output(&self) -> PathBuf {
        self.work_dir.join(OUTPUT_REL)
    }
}

/// Fresh working directory with the matrix directory already in place.
pub fn create_workspace(label: &str) -> io::Result<Dataset> {
    let id = NEXT_ID.fetch_add(1, Ordering::Relaxed);
    let work_dir = std::env::temp_dir().join("allelecount-tests").join(format!(
        "{}-{}-{}",
        std::process::id(),
        id,
        label
    ));
    if work_dir.exists() {
        fs::remove_dir_all(&work_dir)?;
    }
    fs::create_dir_all(work_dir.join("1kgp_out"))?;
    Ok(Dataset { work_dir })
}

pub fn create_dataset(label: &str) -> io::Result<Dataset> {
    let dataset = create_workspace(label)?;
    fs::write(dataset.panel(), PANEL)?;
    fs::write(dataset.matrix(), MATRIX)?;
    Ok(dataset)
}

// rs2 is listed twice (second dropped); rs9 is absent from the matrix.
pub const PANEL: &str = "\u{feff}SNP,Gene,Allele\n\
rs1,OCA2,a\n\
rs2,HERC2,G\n\
rs3,MC1R,T\n\
rs2,HERC2,A\n\
rs4,SLC45A2,T\n\
rs5,TYR,GG\n\
rs9,IRF4,C\n\
,EMPTY,A\n";

pub const MATRIX: &str = "CHROM\tPOS\tID\tREF\tALT\tHG00096\tHG00097\tHG00099\n\
5\t100\trs1\tG\tA\t0|1\t1|1\t./.\n\
15\t200\trs2\tA\tC\t0|0\t0/1\t1\n\
16\t300\trs3\tC\tT\t1|1\t.|1\n\
1\t400\trs4\tCT\tC\t0|1\t1|1\t0|0\n\
11\t500\trs5\tA\tG\t0|1\t.\t1/1\n";

pub const EXPECTED_OUTPUT: &str = "sampleid,rs1_A,rs2_G,rs3_T,rs4_T,rs5_GG,rs9_C\n\
HG00096,1,0,2,1,0,NA\n\
HG00097,2,1,NA,0,NA,NA\n\
HG00099,NA,1,NA,2,0,NA\n";
