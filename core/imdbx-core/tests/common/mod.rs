// 테스트 공용 픽스처: gzip TSV 파일 생성

#![allow(dead_code)]

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

pub const NAME_HEADER: &str =
    "nconst\tprimaryName\tbirthYear\tdeathYear\tprimaryProfession\tknownForTitles";
pub const TITLE_HEADER: &str = "tconst\ttitleType\tprimaryTitle\toriginalTitle\tisAdult\tstartYear\tendYear\truntimeMinutes\tgenres";
pub const AKA_HEADER: &str =
    "titleId\tordering\ttitle\tregion\tlanguage\ttypes\tattributes\tisOriginalTitle";
pub const EPISODE_HEADER: &str = "tconst\tparentTconst\tseasonNumber\tepisodeNumber";
pub const PRINCIPAL_HEADER: &str = "tconst\tordering\tnconst\tcategory\tjob\tcharacters";
pub const RATING_HEADER: &str = "tconst\taverageRating\tnumVotes";

/// Writes `header` and `rows` as a gzip file at `path`.
pub fn write_gz(path: &Path, header: &str, rows: &[&str]) {
    let mut encoder = GzEncoder::new(File::create(path).unwrap(), Compression::default());
    writeln!(encoder, "{header}").unwrap();
    for row in rows {
        writeln!(encoder, "{row}").unwrap();
    }
    encoder.finish().unwrap();
}

/// Writes a gzip file named `file_name` inside `dir` and returns its path.
pub fn fixture(dir: &Path, file_name: &str, header: &str, rows: &[&str]) -> PathBuf {
    let path = dir.join(file_name);
    write_gz(&path, header, rows);
    path
}

pub fn people(dir: &Path) -> PathBuf {
    fixture(
        dir,
        "name.basics.tsv.gz",
        NAME_HEADER,
        &[
            "nm0000158\tTom Hanks\t1956\t\\N\tactor,producer,soundtrack\ttt0109830,tt0162222",
            "nm0000212\tMeg Ryan\t1961\t\\N\tactress,producer\ttt0108160",
            "nm0000129\tTom Cruise\t1962\t\\N\tactor,producer\t\\N",
            "nm0000001\tFred Astaire\t1899\t1987\t\\N\t\\N",
        ],
    )
}

pub fn titles(dir: &Path) -> PathBuf {
    fixture(
        dir,
        "title.basics.tsv.gz",
        TITLE_HEADER,
        &[
            "tt0109830\tmovie\tForrest Gump\tForrest Gump\t0\t1994\t\\N\t142\tDrama,Romance",
            "tt0108160\tmovie\tSleepless in Seattle\tSleepless in Seattle\t0\t1993\t\\N\t105\tComedy,Drama,Romance",
            "tt0903747\ttvSeries\tBreaking Bad\tBreaking Bad\t0\t2008\t2013\t49\tCrime,Drama,Thriller",
            "tt0959621\ttvEpisode\tPilot\tPilot\t0\t2008\t\\N\t58\t\\N",
        ],
    )
}

pub fn akas(dir: &Path) -> PathBuf {
    fixture(
        dir,
        "title.akas.tsv.gz",
        AKA_HEADER,
        &[
            "tt1\t0\tLe Titre\tFR\tfr\t\\N\t\\N\t0",
            "tt1\t1\tThe Title\tUS\ten\timdbDisplay, working\t\\N\t1",
            "tt3\t1\tDer Titel\tDE\t\\N\t\\N\tliteral title\t0",
        ],
    )
}

pub fn episodes(dir: &Path) -> PathBuf {
    fixture(
        dir,
        "title.episode.tsv.gz",
        EPISODE_HEADER,
        &[
            "tt0959621\ttt0903747\t1\t1",
            "tt1054724\ttt0903747\t1\t2",
            "tt0000100\ttt0000099\t\\N\t\\N",
            "tt1054725\ttt0903747\t1\t3",
        ],
    )
}

pub fn principals(dir: &Path) -> PathBuf {
    fixture(
        dir,
        "title.principals.tsv.gz",
        PRINCIPAL_HEADER,
        &[
            "tt0109830\t1\tnm0000158\tactor\t\\N\t[\"Forrest\"]",
            "tt0109830\t2\tnm0000705\tactress\t\\N\t[\"Jenny Curran\"]",
            "tt0108160\t1\tnm0000158\tactor\t\\N\t[\"Sam Baldwin\"]",
            "tt0108160\t2\tnm0000212\tactress\t\\N\t[\"Annie Reed\"]",
            "tt0108160\t5\tnm0001399\tdirector\t\\N\t\\N",
        ],
    )
}

pub fn ratings(dir: &Path) -> PathBuf {
    fixture(
        dir,
        "title.ratings.tsv.gz",
        RATING_HEADER,
        &[
            "tt0000001\t5.7\t2104",
            "tt0109830\t8.8\t2300000",
            "tt0903747\t9.5\t2100000",
            "tt0108160\t6.8\t190000",
            "tt0000002\t9.5\t80",
        ],
    )
}
