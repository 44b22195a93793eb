//! Frontend key identifiers.
//!
//! Values follow libretro's `retro_key` enumeration so key ids can be passed
//! through to cores unchanged.

pub type RetroKey = u32;

pub const UNKNOWN: RetroKey = 0;
pub const BACKSPACE: RetroKey = 8;
pub const TAB: RetroKey = 9;
pub const CLEAR: RetroKey = 12;
pub const RETURN: RetroKey = 13;
pub const PAUSE: RetroKey = 19;
pub const ESCAPE: RetroKey = 27;
pub const SPACE: RetroKey = 32;
pub const EXCLAIM: RetroKey = 33;
pub const QUOTEDBL: RetroKey = 34;
pub const HASH: RetroKey = 35;
pub const DOLLAR: RetroKey = 36;
pub const AMPERSAND: RetroKey = 38;
pub const QUOTE: RetroKey = 39;
pub const LEFTPAREN: RetroKey = 40;
pub const RIGHTPAREN: RetroKey = 41;
pub const ASTERISK: RetroKey = 42;
pub const PLUS: RetroKey = 43;
pub const COMMA: RetroKey = 44;
pub const MINUS: RetroKey = 45;
pub const PERIOD: RetroKey = 46;
pub const SLASH: RetroKey = 47;
pub const NUM_0: RetroKey = 48;
pub const NUM_1: RetroKey = 49;
pub const NUM_2: RetroKey = 50;
pub const NUM_3: RetroKey = 51;
pub const NUM_4: RetroKey = 52;
pub const NUM_5: RetroKey = 53;
pub const NUM_6: RetroKey = 54;
pub const NUM_7: RetroKey = 55;
pub const NUM_8: RetroKey = 56;
pub const NUM_9: RetroKey = 57;
pub const COLON: RetroKey = 58;
pub const SEMICOLON: RetroKey = 59;
pub const LESS: RetroKey = 60;
pub const EQUALS: RetroKey = 61;
pub const GREATER: RetroKey = 62;
pub const QUESTION: RetroKey = 63;
pub const AT: RetroKey = 64;
pub const LEFTBRACKET: RetroKey = 91;
pub const BACKSLASH: RetroKey = 92;
pub const RIGHTBRACKET: RetroKey = 93;
pub const CARET: RetroKey = 94;
pub const UNDERSCORE: RetroKey = 95;
pub const BACKQUOTE: RetroKey = 96;
pub const A: RetroKey = 97;
pub const B: RetroKey = 98;
pub const C: RetroKey = 99;
pub const D: RetroKey = 100;
pub const E: RetroKey = 101;
pub const F: RetroKey = 102;
pub const G: RetroKey = 103;
pub const H: RetroKey = 104;
pub const I: RetroKey = 105;
pub const J: RetroKey = 106;
pub const K: RetroKey = 107;
pub const L: RetroKey = 108;
pub const M: RetroKey = 109;
pub const N: RetroKey = 110;
pub const O: RetroKey = 111;
pub const P: RetroKey = 112;
pub const Q: RetroKey = 113;
pub const R: RetroKey = 114;
pub const S: RetroKey = 115;
pub const T: RetroKey = 116;
pub const U: RetroKey = 117;
pub const V: RetroKey = 118;
pub const W: RetroKey = 119;
pub const X: RetroKey = 120;
pub const Y: RetroKey = 121;
pub const Z: RetroKey = 122;
pub const LEFTBRACE: RetroKey = 123;
pub const BAR: RetroKey = 124;
pub const RIGHTBRACE: RetroKey = 125;
pub const TILDE: RetroKey = 126;
pub const DELETE: RetroKey = 127;

pub const KP0: RetroKey = 256;
pub const KP1: RetroKey = 257;
pub const KP2: RetroKey = 258;
pub const KP3: RetroKey = 259;
pub const KP4: RetroKey = 260;
pub const KP5: RetroKey = 261;
pub const KP6: RetroKey = 262;
pub const KP7: RetroKey = 263;
pub const KP8: RetroKey = 264;
pub const KP9: RetroKey = 265;
pub const KP_PERIOD: RetroKey = 266;
pub const KP_DIVIDE: RetroKey = 267;
pub const KP_MULTIPLY: RetroKey = 268;
pub const KP_MINUS: RetroKey = 269;
pub const KP_PLUS: RetroKey = 270;
pub const KP_ENTER: RetroKey = 271;
pub const KP_EQUALS: RetroKey = 272;

pub const UP: RetroKey = 273;
pub const DOWN: RetroKey = 274;
pub const RIGHT: RetroKey = 275;
pub const LEFT: RetroKey = 276;
pub const INSERT: RetroKey = 277;
pub const HOME: RetroKey = 278;
pub const END: RetroKey = 279;
pub const PAGEUP: RetroKey = 280;
pub const PAGEDOWN: RetroKey = 281;

pub const F1: RetroKey = 282;
pub const F2: RetroKey = 283;
pub const F3: RetroKey = 284;
pub const F4: RetroKey = 285;
pub const F5: RetroKey = 286;
pub const F6: RetroKey = 287;
pub const F7: RetroKey = 288;
pub const F8: RetroKey = 289;
pub const F9: RetroKey = 290;
pub const F10: RetroKey = 291;
pub const F11: RetroKey = 292;
pub const F12: RetroKey = 293;
pub const F13: RetroKey = 294;
pub const F14: RetroKey = 295;
pub const F15: RetroKey = 296;

pub const NUMLOCK: RetroKey = 300;
pub const CAPSLOCK: RetroKey = 301;
pub const SCROLLOCK: RetroKey = 302;
pub const RSHIFT: RetroKey = 303;
pub const LSHIFT: RetroKey = 304;
pub const RCTRL: RetroKey = 305;
pub const LCTRL: RetroKey = 306;
pub const RALT: RetroKey = 307;
pub const LALT: RetroKey = 308;
pub const RMETA: RetroKey = 309;
pub const LMETA: RetroKey = 310;
pub const LSUPER: RetroKey = 311;
pub const RSUPER: RetroKey = 312;
pub const MODE: RetroKey = 313;
pub const COMPOSE: RetroKey = 314;

pub const HELP: RetroKey = 315;
pub const PRINT: RetroKey = 316;
pub const SYSREQ: RetroKey = 317;
pub const BREAK: RetroKey = 318;
pub const MENU: RetroKey = 319;
pub const POWER: RetroKey = 320;
pub const EURO: RetroKey = 321;
pub const UNDO: RetroKey = 322;
pub const OEM_102: RetroKey = 323;

/// One past the highest key id. Keyboard queries at or above this are invalid.
pub const LAST: RetroKey = 324;
