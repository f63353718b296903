// f90namelist/tests/namelist_tests.rs

//! End-to-end parsing and dumping of namelist text.

use f90namelist::{dump, reads, F90nmlError, FortranValue, Namelist};

fn reals(values: &[f64]) -> FortranValue {
    FortranValue::from(values.to_vec())
}

fn strings(values: &[&str]) -> FortranValue {
    FortranValue::from(values.to_vec())
}

#[test]
fn test_single_value() {
    let input = r#"
    &CCFMSIM_SETUP
    CCFMrad=800.0
    /
    "#;
    let nml = reads(input).unwrap();

    let mut expected = Namelist::new();
    expected.insert_group("CCFMSIM_SETUP").insert("CCFMrad", 800.0);
    assert_eq!(nml, expected);
}

#[test]
fn test_multigroup() {
    let input = r#"
    &CCFMSIM_SETUP
    CCFMrad=800.0
    /
    &GROUP2
    R=500.0
    /
    "#;
    let nml = reads(input).unwrap();

    let names: Vec<&str> = nml.group_names().collect();
    assert_eq!(names, vec!["CCFMSIM_SETUP", "GROUP2"]);
    assert_eq!(nml.get_group("GROUP2").unwrap().get_f64("R"), Some(500.0));
}

#[test]
fn test_comments() {
    let input = r#"
    ! Interesting comment at the start
    &CCFMSIM_SETUP
    CCFMrad=800.0
    ! And a comment some where in the middle/halfway !
    var2=40
    /
    &GROUP2
    R=500.0
    /
    "#;
    let nml = reads(input).unwrap();

    let setup = nml.get_group("CCFMSIM_SETUP").unwrap();
    assert_eq!(setup.len(), 2);
    assert_eq!(setup["CCFMrad"], FortranValue::Real(800.0));
    assert_eq!(setup["var2"], FortranValue::Integer(40));
    assert_eq!(nml.get_group("GROUP2").unwrap()["R"], FortranValue::Real(500.0));
}

#[test]
fn test_inline_comment() {
    let nml = reads("&CCFMSIM_SETUP\n  CCFMrad = 800. ! foobar\n/").unwrap();
    assert_eq!(
        nml.get_group("CCFMSIM_SETUP").unwrap().get("CCFMrad"),
        Some(&FortranValue::Real(800.0))
    );
}

#[test]
fn test_indexed_arrays() {
    let input = r#"
    &CCFMSIM_SETUP
    ntrac_picture=4
    var_trac_picture(1)='watcnew'
    des_trac_picture(1)='cloud_water'
    var_trac_picture(2)='watpnew'
    des_trac_picture(2)='rain'
    var_trac_picture(3)='icecnew'
    des_trac_picture(3)='cloud_ice'
    var_trac_picture(4)='granew'
    des_trac_picture(4)='graupel'
    /
    "#;
    let nml = reads(input).unwrap();
    let group = nml.get_group("CCFMSIM_SETUP").unwrap();

    let names: Vec<&str> = group.variable_names().collect();
    assert_eq!(
        names,
        vec!["ntrac_picture", "var_trac_picture", "des_trac_picture"]
    );
    assert_eq!(group["ntrac_picture"], FortranValue::Integer(4));
    assert_eq!(
        group["var_trac_picture"],
        strings(&["watcnew", "watpnew", "icecnew", "granew"])
    );
    assert_eq!(
        group["des_trac_picture"],
        strings(&["cloud_water", "rain", "cloud_ice", "graupel"])
    );
}

#[test]
fn test_boolean_and_scientific_format() {
    let input = r#"
    &ATHAM_SETUP

    nz      =300
    zstart  =0.
    ztotal  =15000.
    dzzoom  =50.
    kcenter =20
    nztrans =0
    nztrans_boundary =6

    cpumax  =9.e6

    no_uwind=.false.
    no_vwind=.true.
    /
    "#;
    let nml = reads(input).unwrap();
    let group = nml.get_group("ATHAM_SETUP").unwrap();

    assert_eq!(group.len(), 10);
    assert_eq!(group["nz"], FortranValue::Integer(300));
    assert_eq!(group["zstart"], FortranValue::Real(0.0));
    assert_eq!(group["ztotal"], FortranValue::Real(15000.0));
    assert_eq!(group["nztrans"], FortranValue::Integer(0));
    assert_eq!(group["cpumax"], FortranValue::Real(9.0e6));
    assert_eq!(group["no_uwind"], FortranValue::Logical(false));
    assert_eq!(group["no_vwind"], FortranValue::Logical(true));
}

#[test]
fn test_inline_arrays() {
    let input = r#"
    ! can have blank lines and comments in the namelist input file
    ! place these comments between NAMELISTs

    !
    ! not every compiler supports comments within the namelist
    !   in particular vastf90/g77 does not
    !
    ! some will skip NAMELISTs not directly referenced in read
    !&BOGUS rko=1 /
    !
    &TTDATA
    TTREAL =  1.,
    TTINTEGER = 2,
    TTCOMPLEX = (3.,4.),
    TTCHAR = 'namelist',
    TTBOOL = T/
    &AADATA
    AAREAL =  1.  1.  2.  3.,
    AAINTEGER = 2 2 3 4,
    AACOMPLEX = (3.,4.) (3.,4.) (5.,6.) (7.,7.),
    AACHAR = 'namelist' 'namelist' 'array' ' the lot',
    AABOOL = T T F F/
    &XXDATA
    XXREAL =  1.,
    XXINTEGER = 2,
    XXCOMPLEX = (3.,4.)/! can have blank lines and comments in the namelist input file
    "#;
    let nml = reads(input).unwrap();

    let names: Vec<&str> = nml.group_names().collect();
    assert_eq!(names, vec!["TTDATA", "AADATA", "XXDATA"]);

    let tt = nml.get_group("TTDATA").unwrap();
    assert_eq!(tt["TTREAL"], FortranValue::Real(1.0));
    assert_eq!(tt["TTINTEGER"], FortranValue::Integer(2));
    assert_eq!(tt["TTCOMPLEX"], FortranValue::Complex(3.0, 4.0));
    assert_eq!(tt["TTCHAR"], FortranValue::character("namelist"));
    assert_eq!(tt["TTBOOL"], FortranValue::Logical(true));

    let aa = nml.get_group("AADATA").unwrap();
    assert_eq!(aa["AAREAL"], reals(&[1.0, 1.0, 2.0, 3.0]));
    assert_eq!(aa["AAINTEGER"], FortranValue::from(vec![2i64, 2, 3, 4]));
    assert_eq!(
        aa["AACOMPLEX"],
        FortranValue::from(vec![(3.0, 4.0), (3.0, 4.0), (5.0, 6.0), (7.0, 7.0)])
    );
    assert_eq!(
        aa["AACHAR"],
        strings(&["namelist", "namelist", "array", " the lot"])
    );
    assert_eq!(aa["AABOOL"], FortranValue::from(vec![true, true, false, false]));

    let xx = nml.get_group("XXDATA").unwrap();
    assert_eq!(xx["XXREAL"], FortranValue::Real(1.0));
    assert_eq!(xx["XXINTEGER"], FortranValue::Integer(2));
    assert_eq!(xx.get_f64("XXINTEGER"), Some(2.0));
    assert_eq!(xx["XXCOMPLEX"], FortranValue::Complex(3.0, 4.0));
}

#[test]
fn test_inline_array_with_commas() {
    let input = r#"
                &foo
                bar = 7.2, 4.3, 3.14,
                /
                "#;
    let nml = reads(input).unwrap();
    assert_eq!(nml.get_group("foo").unwrap()["bar"], reals(&[7.2, 4.3, 3.14]));
}

#[test]
fn test_multiline_variable() {
    let input = "&AADATA\n  AACOMPLEX = 3., 4., 3., 4.,\n              5., 6., 7., 7.\n/";
    let nml = reads(input).unwrap();

    assert_eq!(
        nml.get_group("AADATA").unwrap()["AACOMPLEX"],
        reals(&[3.0, 4.0, 3.0, 4.0, 5.0, 6.0, 7.0, 7.0])
    );
}

#[test]
fn test_dump_single_value() {
    let input = "&CCFMSIM_SETUP\n  CCFMrad = 800.\n/";
    assert_eq!(dump(&reads(input).unwrap(), true).unwrap(), input);
}

#[test]
fn test_dump_multigroup() {
    let input = "&CCFMSIM_SETUP\n  CCFMrad = 800.\n/\n&GROUP2\n  R = 500.\n/";
    assert_eq!(dump(&reads(input).unwrap(), true).unwrap(), input);
}

#[test]
fn test_dump_path() {
    let input = "&settings\n  path = '/home/monkey/'\n/";
    assert_eq!(dump(&reads(input).unwrap(), false).unwrap(), input);
}

#[test]
fn test_dump_expanded_array() {
    let input = "&CCFMSIM_SETUP
  var_trac_picture(1) = 'watcnew'
  var_trac_picture(2) = 'watpnew'
  var_trac_picture(3) = 'icecnew'
  var_trac_picture(4) = 'granew'
  des_trac_picture(1) = 'cloud_water'
  des_trac_picture(2) = 'rain'
  des_trac_picture(3) = 'cloud_ice'
  des_trac_picture(4) = 'graupel'
/";
    assert_eq!(dump(&reads(input).unwrap(), false).unwrap(), input);
}

#[test]
fn test_dump_inline_array() {
    let input = "&AADATA\n  AACOMPLEX = (3.,4.) (3.,4.) (5.,6.) (7.,7.)\n/";
    assert_eq!(dump(&reads(input).unwrap(), true).unwrap(), input);
}

#[test]
fn test_repeated_group_names() {
    let input = "&REL_CTRL
NSPEC=        1,
SPECNUM_REL= 100,
/
&RELEASE
IDATE1=  20100101,
ITIME1=  000000,
IDATE2=  20100201,
ITIME2=  000000,
/
&RELEASE
IDATE1=  20100101,
ITIME1=  000000,
IDATE2=  20100201,
ITIME2=  000000,
/";
    let nml = reads(input).unwrap();

    let names: Vec<&str> = nml.group_names().collect();
    assert_eq!(names, vec!["REL_CTRL", "RELEASE", "RELEASE0"]);
    assert_eq!(nml.get_group("RELEASE0").unwrap().get_i64("IDATE2"), Some(20100201));

    let output = dump(&nml, false).unwrap();
    assert_eq!(
        output.matches("RELEASE").count(),
        input.matches("RELEASE").count()
    );
}

#[test]
fn test_third_repeat_gets_next_suffix() {
    let input = "&RELEASE\nX=1\n/\n&RELEASE\nX=2\n/\n&RELEASE\nX=3\n/";
    let nml = reads(input).unwrap();

    let names: Vec<&str> = nml.group_names().collect();
    assert_eq!(names, vec!["RELEASE", "RELEASE0", "RELEASE1"]);
    assert_eq!(nml.get_group("RELEASE1").unwrap().get_i64("X"), Some(3));
}

#[test]
fn test_array_gap_is_an_error() {
    let input = "&GRID\n  a(1) = 1\n  a(3) = 3\n/";

    assert_eq!(
        reads(input).unwrap_err(),
        F90nmlError::ArrayIndexInconsistency {
            group: "GRID".to_string(),
            variable: "a".to_string(),
            index: 3,
            count: 2,
        }
    );
}

#[test]
fn test_malformed_lines_report_line_number() {
    let err = reads("&g\n  x = 1\n  y = 2 = 3\n/").unwrap_err();
    assert!(matches!(err, F90nmlError::MalformedInput { .. }));
    assert_eq!(err.line(), Some(3));

    let err = reads("&g\n  x = @@\n/").unwrap_err();
    assert_eq!(err.line(), Some(2));
    assert_eq!(err.category(), "parse");
}

#[test]
fn test_string_with_equals_and_bang() {
    let nml = reads("&g\n  msg = 'a=b! not a comment' ! comment\n/").unwrap();
    assert_eq!(
        nml.get_group("g").unwrap().get_string("msg"),
        Some("a=b! not a comment")
    );
}

#[test]
fn test_later_assignment_wins() {
    let nml = reads("&g\n  x = 1\n  y = 2\n  x = 3\n/").unwrap();
    let group = nml.get_group("g").unwrap();

    let names: Vec<&str> = group.variable_names().collect();
    assert_eq!(names, vec!["x", "y"]);
    assert_eq!(group.get_i64("x"), Some(3));
}

#[test]
fn test_modify_then_dump() {
    let mut nml = reads("&g\n  x = 1\n  s = 'old'\n/").unwrap();

    nml.get_group_mut("g").unwrap()["x"] = FortranValue::Real(2.5);
    let previous = nml.view("g").unwrap().set("s", "new").unwrap();
    assert_eq!(previous, FortranValue::character("old"));

    assert!(matches!(
        nml.view("g").unwrap().set("missing", 1i64),
        Err(F90nmlError::VariableNotFound { .. })
    ));
    assert_eq!(dump(&nml, true).unwrap(), "&g\n  x = 2.5\n  s = 'new'\n/");
}

#[test]
fn test_dump_rejects_nested_arrays() {
    let mut nml = Namelist::new();
    nml.insert_group("g").insert(
        "nested",
        FortranValue::Array(vec![FortranValue::from(vec![1i64, 2])]),
    );
    nml.insert_group("h").insert("empty", FortranValue::Array(Vec::new()));

    let err = dump(&nml, true).unwrap_err();
    assert_eq!(err.category(), "format");
    assert!(dump(&nml, false).is_err());
}

#[test]
fn test_round_trip() {
    let input = "&MIXED
  n = 10
  dt = 0.5
  z = (1.5,-2.)
  flag = .false.
  label = 'run one'
  levels = 1 2 3
  single(1) = 5
  files = './in.nc' '/data/out.nc'
/";
    let nml = reads(input).unwrap();

    assert_eq!(
        nml.get_group("MIXED").unwrap()["single"],
        FortranValue::from(vec![5i64])
    );
    assert_eq!(dump(&nml, true).unwrap(), input);
    assert_eq!(reads(&dump(&nml, true).unwrap()).unwrap(), nml);
    assert_eq!(reads(&dump(&nml, false).unwrap()).unwrap(), nml);
}

#[test]
fn test_logical_list() {
    let nml = reads("&G\nC = T F T\n/").unwrap();
    assert_eq!(
        nml.get_group("G").unwrap()["C"],
        FortranValue::from(vec![true, false, true])
    );
}

#[test]
fn test_string_list_with_paths() {
    let nml = reads("&g\n paths = '/a/' '/b/' 'c'\n/").unwrap();
    assert_eq!(nml.get_group("g").unwrap()["paths"], strings(&["/a/", "/b/", "c"]));

    let mut written = Namelist::new();
    written
        .insert_group("io")
        .insert("files", vec!["./in.nc", "out.nc"]);
    let text = dump(&written, true).unwrap();
    assert_eq!(text, "&io\n  files = './in.nc' 'out.nc'\n/");
    assert_eq!(reads(&text).unwrap(), written);
}

#[test]
fn test_single_element_array_round_trip() {
    let nml = reads("&g\n a(1) = 5\n/").unwrap();
    let text = dump(&nml, true).unwrap();

    assert_eq!(text, "&g\n  a(1) = 5\n/");
    assert_eq!(reads(&text).unwrap(), nml);
}

#[test]
fn test_scalars_in_expanded_mode() {
    let input = "&g\n  n = 3\n  s = 'x'\n  v(1) = 1.\n  v(2) = 2.\n/";
    let nml = reads(input).unwrap();
    assert_eq!(dump(&nml, false).unwrap(), input);
}

#[test]
fn test_comments_with_group_delimiters() {
    let input = "&CORE\n dt = 100. ! R&D value\n/\n&OPT\n n = 1 / ! a/b\n";
    let nml = reads(input).unwrap();

    let names: Vec<&str> = nml.group_names().collect();
    assert_eq!(names, vec!["CORE", "OPT"]);
    assert_eq!(nml.get_group("CORE").unwrap().get_f64("dt"), Some(100.0));
    assert_eq!(nml.get_group("OPT").unwrap().get_i64("n"), Some(1));
}

#[test]
fn test_repeated_trailing_commas() {
    let nml = reads("&g\n x = 1,,\n/").unwrap();
    assert_eq!(nml.get_group("g").unwrap()["x"], FortranValue::Integer(1));
}

#[test]
fn test_huge_index_list_is_malformed() {
    let err = reads("&g\n a(18446744073709551615) = 1 2 3\n/").unwrap_err();
    assert_eq!(err.line(), Some(2));
}

#[test]
fn test_parse_from_many_threads() {
    let input = "&g\n  a(1) = 1\n  a(2) = 2\n  b = 'text'\n/";
    let expected = reads(input).unwrap();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4).map(|_| scope.spawn(|| reads(input))).collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap().unwrap(), expected);
        }
    });
}
