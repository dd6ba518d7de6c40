//! Built-in RLE patterns.

/// A compiled-in pattern and where it goes on the board.
#[derive(Clone, Copy, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub width: usize,
    pub height: usize,
    /// First column word, or `None` to center horizontally.
    pub column_word: Option<usize>,
    pub rle: &'static str,
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "reburn",
        width: 95,
        height: 73,
        column_word: Some(15),
        rle: REBURN_RLE,
    },
    Pattern {
        name: "back-and-forth",
        width: 334,
        height: 103,
        column_word: None,
        rle: BACK_AND_FORTH_RLE,
    },
    Pattern {
        name: "quetzal",
        width: 155,
        height: 175,
        column_word: None,
        rle: QUETZAL_RLE,
    },
];

pub const DEFAULT_PATTERN: &str = "quetzal";

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

// https://conwaylife.com/ref/DRH/reburn.html
const REBURN_RLE: &str = "\
27b2o$26b2ob2o$27b4o$18b4o6b2o$17b6o10b2o$16b2ob4o12bo$17b2o14b3o3$8b4o8\
b2o$8bo3bo9bo$8bo11b2o$9bo2bo2b2o5b3o6bo3bo$14b3o6b3o5b4o$9bo2bo2b2o5b3o\
7b2o59bo$8bo11b2o70bo$8bo3bo9bo69b3o$8b4o17b2o$27bo$28bobo$22b2o5bo$21b4\
o$20b2ob2o$21b2o12bo$34bo$34b3o3$19b6o50bo$19bo5bo15bo32bobob2o$19bo20bo\
23bobo7bobobobo$20bo4bo14b3o19b2o2b2o7b2o3bo$22b2o39bob2obo8b3o$13b4o18b\
o11b3o15bo3bo7bo$13bo3bo6bo9bobo10b3obo14bobo$13bo9b2o9bobo15bo13bo$14bo\
2bo5bobo9bo16b2o12bo$51b2o12bobo11bo$2b2o47bo28bo$b4o12bo53bo7bo$2ob2o10\
b4o21bobo29bo$b2o5b2ob2obo4bo19bo2bobo4bo20b2o5b3o$7bo6bob2o20b2o6bobob2\
o12b2o4bo5b5o$6b2o13b2o14bo4bo3bo3bo12b4o8b2ob3o$7bo6b3o2bo3bo12b5obo3bo\
bob2o10b2ob2o9b2o$b2o5b2ob2ob3obob3o12bo8bo4bo13b2o$2ob2o30b4o4bo$b4o29b\
o8bo$2b2o29b3o2bo5bobo$34b3o7bo7bo$9b6o20bo10bo3b3o$9bo5bo20b3obo3b3o2b2\
o$9bo26bo2b2o2b3o3bo$10bo4bo4bo2bo13b3o4b2o5bo$12b2o5bo19bo5b6o$19bo3bo1\
3bo8bobo$19b4o14bobo9b4obo$36bo12bo3b2o$37bobo11b2o$37bo13b4o$39bo14bo$3\
7b3o$36bo2b2o$36b3obo$35bo$34b3o$33b3o2bo$34bo$35b4o$35bo$37b2o$37b4o$40\
bo!";

// https://conwaylife.com/ref/DRH/back.forth.html
const BACK_AND_FORTH_RLE: &str = "\
29b2o272b2o$28bobo272bobo$13bobo11bo6b2o262b2o6bo11bobo$8bo4bo2bo10bo2bo\
2bo2bob2o254b2obo2bo2bo2bo10bo2bo4bo$9b2o5b2o9bo6b2o2b2o254b2o2b2o6bo9b2\
o5b2o$4b2o8bo3b2o8bobo272bobo8b2o3bo8b2o$4b2o10b2o11b2o272b2o11b2o10b2o$\
13bo2bo8bo282bo8bo2bo$13bobo10b2o278b2o10bobo$25b2o280b2o6$32bobo$33b2o$\
33bo16b2o230b2o$50bo232bo$48bobo232bobo$48b2o234b2o2$40bo13b2o222b2o$41b\
2o11bo224bo$41bo10bobo224bobo$52b2o226b2o$38bo2bo30bo188bo30b2ob2o$39b2o\
29b3o188b3o28b2ob2o$69bo194bo29bo$69b2o192b2o$32b2o266b2o$33b2o264b2o$32\
bo6b2o252b2o6bo$21b2o16b2o252b2o16b2o$20bo3bo284bo3bo$9b2o8bo5bo7bo266bo\
7bo5bo8b2o$9b2o8bo3bob2o4bobo266bobo4b2obo3bo8b2o$19bo5bo3b2o12b2o10bo23\
3b2o12b2o3bo5bo$20bo3bo4b2o12b2o11b2o231b2o12b2o4bo3bo$21b2o6b2o24b2o246\
b2o6b2o$31bobo266bobo$33bo266bo$76bo33bo33bo33bo33bo33bo$76bo15b3o15bo15\
b3o15bo15b3o15bo15b3o15bo15b3o15bo15b3o$29bo46bo33bo33bo33bo33bo33bo57bo\
$27bobo274bobo$17b2o6b2o24b2o254b2o6b2o$16bo3bo4b2o12b2o11b2o239b2o12b2o\
4bo3bo$15bo5bo3b2o12b2o10bo241b2o12b2o3bo5bo$5b2o8bo3bob2o4bobo274bobo4b\
2obo3bo8b2o$5b2o8bo5bo7bo274bo7bo5bo8b2o$16bo3bo292bo3bo$17b2o16b2o260b2\
o16b2o$28bo6b2o260b2o6bo$29b2o272b2o$28b2o274b2o2$298bo$35b2o259b2ob2o$3\
4bo2bo258b2ob2o$48b2o234b2o$37bo10bobo52bo126bo52bobo$37b2o11bo51bobo124\
bobo51bo$36bo13b2o49bob2o15b2o90b2o15b2obo49b2o$95b2o3b2ob2o14bobo90bobo\
14b2ob2o3b2o$44b2o49b2o4bob2o13bo6b2o80b2o6bo13b2obo4b2o49b2o$44bobo55bo\
bo13bo2bo2bo2bob2o72b2obo2bo2bo2bo13bobo14b2o39bobo$46bo56bo5bo8bo6b2o2b\
2o72b2o2b2o6bo8bo5bo14bobo39bo$29bo16b2o61bobo7bobo90bobo7bobo22bo38b2o$\
29b2o68b2o8b2o9b2o90b2o9b2o8b2o$28bobo68b2o132b2o4$102bo$101bo132bo$21b2\
o78b3o129b2o76b2o$9bobo10b2o62b2o158b2o62b2o10bobo$9bo2bo8bo63bobo158bob\
o63bo8bo2bo$2o10b2o11b2o58bo21b2o139bo58b2o11b2o10b2o$2o8bo3b2o8bobo57b2\
o14b2o5bo2bo137b2o57bobo8b2o3bo8b2o$5b2o5b2o9bo6b2o2b2o63bo2bo4bo2bo120b\
2o65b2o2b2o6bo9b2o5b2o$4bo4bo2bo10bo2bo2bo2bob2o54b2o8b2o8bo119bobo9b2o5\
4b2obo2bo2bo2bo10bo2bo4bo$9bobo11bo6b2o57bobo140bo9bobo57b2o6bo11bobo$24\
bobo62bo17bo2bo133bo62bobo$25b2o61b2o19bo134b2o61b2o4$223b3o$225bo$224bo\
3$124bobo80bobo$116b3o5bo3bo76bo3bo5b3o$111b2o2bo2bobo7bo5b2o62b2o5bo7bo\
bo2bo2b2o$109bo2bo2b2o7bo4bo4b2o62b2o4bo4bo7b2o2bo2bo$100b2o6bo19bo76bo1\
9bo6b2o$100b2o6bo10b3o2bo3bo76bo3bo2b3o10bo6b2o$108bo15bobo80bobo15bo$10\
9bo2bo108bo2bo$111b2o108b2o!";

// https://conwaylife.com/patterns/quetzal56.rle
const QUETZAL_RLE: &str = "\
113b2o$112bobo$106b2o4bo$104bo2bo2b2ob4o$104b2obobobobo2bo$107bobobobo$1\
07bobob2o$108bo2$121b2o$112b2o7bo$112b2o5bobo$119b2o$44b2o$44bobo90b2o$4\
6bo4b2o77bo5bo$42b4ob2o2bo2bo48bo25bo3b2o2bo$42bo2bobobobob2o47bo26bo4bo\
3bo$45bobobobo50b3o10b3o12bobo3bo2bo$46b2obobo57b2o4bo19b4o$50bo59bo5bo$\
107b3o25b4o$36b2o7b3o59bo22bobo3bo2bo$37bo6bo3bo80bo4bo3bo$37bobo4bo3bo8\
0bo3b2o2bo$38b2o2b2o5b2o79bo5bo$41bo4bo4bo85b2o$41bo3bobo3bo$41bo4bob2ob\
o78bo$42b3o83bo2b2o$89bo38b2o$88bo11b2o$48b2o38b3o11bo5bo$48bo52bo2b2o3b\
o$49b3o48bo3bo4bo24b2o$51bo47bo2bo3bobo25bobo$36b2o62b4o32bo$35bobo98b2o\
$37bo26bo35b4o$62bobo34bo2bo3bobo$63b2o35bo3bo4bo$101bo2b2o3bo$102bo5bo$\
100b2o11bo$75bo7b2o28b2o$74bo7bobo27bobo$74b3o5bo$81b2o24b2o$106bo2b2o26\
bo$81b4o21b2ob2o24bo2bo$22b2o57bo2bo22b3o29bo$21bobo41bob2o14bo19b2o25b2\
o2bo4bo$23bo39b3ob2o9bo5b3o15bobo25b2o2bo2b4o$62bo13bobo7bo15bo31bo5bo$6\
3b3ob2o8b2o22b2o32b5o$65bobo8b2o41b2o$65bobo8b2o41bobo13b5o$3b2o61bo9b2o\
41bo14bo5bo$4bo125b2o2bo2b4o$2bo127b2o2bo4bo$2b5o14b2o85bo30bo$7bo13bo85\
bobo25bo2bo$4b3o12bobo86bob3o2b2o20bo$3bo9b2o4b2o86b2ob2o3b2o14bo$3b4o6b\
3o90bo2bo20bobo$b2o3bo3b2o2bo92b4o19bo2bo$o2b3o4b2o52b2ob2obo7bo9b2o41b2\
o$2obo59b2o2b2ob2o4b2ob2o7bo18b4o14b2o$3bo67bo3b2ob3o5bobo17bo2bo16b2o$3\
b2o58b2o10b5o6b2o19b2ob2o3b2o8bo9b2o$63b2o5b2o4b3o29bob3o2b2o18bobo$70b2\
o5bo29bobo27bo$11b2o50bo44bo28b2o$12bo50b2ob2o2b2o$9b3o52bob2ob2o23bo2bo\
2bo14bo$9bo81bo2b7o13bobo$91b3o19bo2bo$27b2o66b2obo15b2o$27bobo63b3obobo\
$27bo52b2o10bo3bo2bo20b3o$67b2o22bob2ob2ob2o9b2o8bo$66bo2bo21bobo3bobo9b\
obo9bo$69bo20b2o2b4obo9bo$69bo16bo5bobobo2b2o7b2o$59b2o5b2obo14b4o4bobo3\
bo$52bo5bo7b2o15bo3bo3b2obo3bo53bo$51bo3b2o2bo23bo2bo6bob2obob2o50b2o$51\
bo4bo3bo23b3o6bo2b3o2bo42b2o$52bobo3bo2bo5b2o23b2obo3bo44b2ob3o2bobo$57b\
4o6b2o23bo2b4o49bo5bo$94bo54b5o$41b2o14b4o12b2o17bo2b4o$41bobo8bobo3bo2b\
o12bo17b2obo2bo50b5o$41bo9bo4bo3bo13bob2o15bo40b3o11bo5bo$51bo3b2o2bo15b\
o17bobo15b2o3b2o16bo9b2ob3o2bobo$52bo5bo20bo14b2o3b2o3b2ob2obo2bo2bo18bo\
8b2o$59b2o16bo2bo18bobo3bobo3bobo4bo33b2o$78b3o16b2o2b4o2bob2obob4obo3b2\
o27bo$52bo25b3o15bo2b2o3bobobobobobo4bo3bo$51bobo8bo2bo2bo10bo16bobo2bo4\
bo5bobo2b2ob2obo21bo$51bo2bo7b7o2bo7bo15b2ob3o4b2o4b2o2bob2obobo21bobo$5\
2b2o15b3o7bo2bo14bo4bobo5bo2bobo4bo23bo2bo$64bob2o12bo2bo8b2o3bob2o3b2o3\
b3o7b3o23b2o$45b2o16bobob3o10bo3bo12bo4bobo5bo2bobo4bo$46b2o8b2o5bo2bo3b\
o7b3o3bo10b2ob3o4b2o4b2o2bob2obobo15bo$45bo10bobo3b2ob2ob2obo11b2o11bobo\
2bo4bo5bobo2b2ob2obo14b2o9b2o$58bo4bobo3bobo4bo3b3o13bo2b2o3bobobobobobo\
4bo3bo13bobo9bobo$58b2o3bob4o2b2o3bobob3o14b2o2b4o2bob2obob4obo3b2o26bo$\
16bo45b2o2bobobo28bobo3bobo3bobo4bo32b2o$15bo2bo45bo3bobo28b2o3b2ob2obo2\
bo2bo$14bo49bo3bob2o39b2o3b2o$14bo4bo2b2o37b2obob2obo$13b4o2bo2b2o37bo2b\
3o2bo$13bo5bo43bo3bob2o$14b5o45b4o2bo26bo$68bo26bobo$14b5o45b4o2bo17b2o6\
b2o$13bo5bo11b2o31bo2bob2o7b3o7bo$13b4o2bo2b2o8b2o35bo8b2o6bobo35bo$14bo\
4bo2b2o7bo13b2o3b2o15bobo9bobo4b2o36b2o$14bo31bo2bo2bob2ob2o3b2o3b2o12bo\
41bobo$15bo2bo25bo4bobo3bobo3bobo18b2o$16bo21b2o3bob4obob2obo2b4o2b2o14b\
obo$22bo16bo3bo4bobobobobobo3b2o2bo13b2o$21bobo15bob2ob2o2bobo5bo4bo2bob\
o$20bo2bo16bobob2obo2b2o4b2o4b3ob2o$21b2o19bo4bobo2bo5bobo4bo$41b3o7b3o3\
b2o3b2obo3b2o$42bo4bobo2bo5bobo4bo45bo$17b2o9b3o9bobob2obo2b2o4b2o4b3ob2\
o41bobo$16bobo9bo10bob2ob2o2bobo5bo4bo2bobo43b2o$16bo12bo9bo3bo4bobobobo\
bobo3b2o2bo18b2o34b2o$15b2o21b2o3bob4obob2obo2b4o2b2o19b2o33bobo$44bo4bo\
bo3bobo3bobo44b2o10bo$46bo2bo2bob2ob2o3b2o6bobo35b2o2b2o5b2obo2bo$45b2o3\
b2o18b2o22b2o16bobo3bo3b4o$71bo21bobo17bo4b2obo$93bo24bo3b4o$84bob2o4b2o\
bo2bo11b2o7b2o5bo$83b5o4bo2b4o12bo8bobob2o2bo$83b4o7bo13b3o9bo4bob2o$73b\
2o17bo2b4o9bo9b2obobobo$74bo9b3o5b2obo3bo19bobobobo$42b3o29bobo7b3o6bo2b\
3o2bo17bobob2ob2o$42bo32b2o8bo7bob2obob2o15b2o2b3o2bo$43bo47b2obo3bo19bo\
bo5bo$92bobo3bo19bob5ob2o$92bobobo2b2o18bo4bobo$56bobo31b2o2b4obo20b3o3b\
o$56b2o33bobo3bobo22bob2o$57bo13b2o18bob2ob2ob2o17b3o$72bo19bo3bo2bo18bo\
2b7o$72bobo18b3obobo21bo2bo2bo$43b2o28b3ob2o16b2obo$43bobo29b2ob2o11b3o$\
45bo10b2o18bo2bo11bo2b7o$40bo2bob2o5b2o2b2o17b2ob3o5b2o6bo2bo2bo$40b4o2b\
o4bobo21b2o3bo5bobo$44b2o6bo24bob4o5bo$40b4o2bo30bo3bo6b2o$39bo3bob2o7b2\
o23b3o$37bo2bo4bo8bo$37b2obob2obo9b3o15b2o$40bo3bob2o9bo14bobo$40b2o2bob\
o25bo$38b2o2bobobo24b2o$39bobo2bo2b2o$39bo5bobo$38b2ob5obo$39bo6bo$39bob\
o2b2o$40b4o48bo$45b3o45b2o$38b7o2bo44b2o$38bo2bo2bo!";
