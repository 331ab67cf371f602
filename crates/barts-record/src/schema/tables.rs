//! Static D5FD record layout tables.
//!
//! Field names and descriptions follow the host DSECT definitions
//! (ND5FDHDR, ND5FDTAR, ND5FDMIR, ...). All body tables are relative to
//! the body base at 0x060; the header table is relative to the start of
//! the record. Tables are defined once and never mutated.

use crate::field::{FieldDescriptor, FieldKind};

const fn fld(
    name: &'static str,
    offset: usize,
    len: usize,
    kind: FieldKind,
    desc: &'static str,
) -> FieldDescriptor {
    FieldDescriptor {
        name,
        offset,
        len,
        kind,
        desc,
    }
}

/// Standard header (ND5FDHDR), BARTS control header (ND5FDCHD) and
/// system security controls (ND5FDSSC): 0x000-0x05F.
pub static HEADER_FIELDS: &[FieldDescriptor] = &[
    fld("ND5FDBID", 0x000, 2, FieldKind::Bit, "RECORD ID = X'D5FD'"),
    fld("ND5FDCHK", 0x002, 1, FieldKind::Bit, "RECORD CODE CHECK"),
    fld("ND5FDCTL", 0x003, 1, FieldKind::Bit, "CONTROL BYTE"),
    fld("ND5FDPGM", 0x004, 4, FieldKind::Char, "LAST PROGRAM TO FILE"),
    fld("ND5FDFCH", 0x008, 4, FieldKind::Bit, "FORWARD CHAIN ADDRESS"),
    fld("ND5FDBCH", 0x00C, 4, FieldKind::Bit, "BACKCHAIN ADDRESS"),
    fld("SPARE1", 0x010, 16, FieldKind::Spare, "SPARES"),
    fld("ND5FDTYP", 0x020, 3, FieldKind::Char, "BARTS RECORD TYPE"),
    fld("ND5FDETK", 0x023, 1, FieldKind::Char, "ELECTRONIC DOCUMENT"),
    fld("ND5FDBNC", 0x024, 2, FieldKind::Char, "BLOCK NBR IN CHAIN"),
    fld("ND5FDNBC", 0x026, 2, FieldKind::Char, "TOTAL NBR OF BLOCKS"),
    fld("ND5FDSN1", 0x028, 2, FieldKind::Bin, "SEQUENCE NBR OF BLOCK"),
    fld("ND5FDSN2", 0x02A, 2, FieldKind::Bin, "TOTAL NBR OF BLOCKS SENT"),
    fld("ND5FDNAB", 0x02C, 2, FieldKind::Bin, "NEXT AVAILABLE BYTE"),
    fld("ND5FDCIR", 0x02E, 2, FieldKind::Bin, "COUNT OF DATA ITEMS"),
    fld("ND5FDRTI", 0x030, 1, FieldKind::Bit, "RETRANSMIT INDICATOR"),
    fld("ND5FDEXT", 0x031, 1, FieldKind::Char, "XT TAXES ELIMINATED"),
    fld("ND5FDMUR", 0x032, 1, FieldKind::Char, "BARTS USER INDICATOR"),
    fld("SPARE2", 0x033, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDH01", 0x034, 4, FieldKind::Bin, "HASHTOTAL #1"),
    fld("ND5FDH02", 0x038, 4, FieldKind::Bin, "HASHTOTAL #2"),
    fld("ND5FDH03", 0x03C, 2, FieldKind::Bin, "HASHTOTAL #3"),
    fld("ND5FDH04", 0x03E, 2, FieldKind::Bin, "HASHTOTAL #4"),
    fld("ND5FDH05", 0x040, 2, FieldKind::Bin, "HASHTOTAL #5"),
    fld("ND5FDH06", 0x042, 2, FieldKind::Bin, "HASHTOTAL #6"),
    fld("ND5FDH07", 0x044, 2, FieldKind::Bin, "HASHTOTAL #7"),
    fld("ND5FDH08", 0x046, 2, FieldKind::Bin, "HASHTOTAL #8"),
    fld("ND5FDH09", 0x048, 4, FieldKind::Bin, "HASHTOTAL #9"),
    fld("ND5FDH10", 0x04C, 2, FieldKind::Bin, "HASHTOTAL #10"),
    fld("ND5FDH11", 0x04E, 2, FieldKind::Bin, "HASHTOTAL #11"),
    fld("ND5FDH12", 0x050, 4, FieldKind::Bin, "HASHTOTAL #12"),
    fld("SPARE3", 0x054, 7, FieldKind::Spare, "SPARES"),
    fld("ND5FDTER", 0x05B, 3, FieldKind::Bit, "CONNECTIVITY TRANSMISSION ERRORS"),
    fld("ND5FDTCI", 0x05E, 2, FieldKind::Bin, "TOTAL COUNT OF ITINERARY SEGMENTS"),
];

/// TAR — Ticket Accounting Record (ND5FDTAR).
pub static TAR_FIELDS: &[FieldDescriptor] = &[
    fld("ND5FDTKN", 0x000, 14, FieldKind::Char, "TICKET NUMBER"),
    fld("ND5FDCTN", 0x00E, 3, FieldKind::Char, "CONJUNCTION TICKET NBR RANGE"),
    fld("ND5FDPNL", 0x011, 6, FieldKind::Char, "PNR LOCATOR"),
    fld("ND5FDCCP", 0x017, 1, FieldKind::Bit, "CREDIT CARD RESTRICTIONS"),
    fld("ND5FDBDI", 0x018, 1, FieldKind::Char, "BASE FARE DECIMAL INDICATOR"),
    fld("ND5FDBEI", 0x019, 1, FieldKind::Char, "INVOL/REISSUE BACKGROUND"),
    fld("ND5FDTBS", 0x01A, 8, FieldKind::Pic, "BASE FARE AMOUNT"),
    fld("ND5FDTCC", 0x022, 3, FieldKind::Char, "BASE FARE CURRENCY CODE"),
    fld("ND5FDFCC", 0x025, 3, FieldKind::Char, "TOTAL FARE CURRENCY CODE"),
    fld("ND5FDTDI", 0x028, 1, FieldKind::Char, "TOTAL FARE DECIMAL INDICATOR"),
    fld("SPARE_TAR1", 0x029, 1, FieldKind::Spare, "SPARE BYTE"),
    fld("ND5FDTTF", 0x02A, 8, FieldKind::Pic, "TOTAL FARE"),
    fld("ND5FDFTA", 0x032, 8, FieldKind::Pic, "FARE TAX TOTAL AMOUNT"),
    fld("ND5FDPTA", 0x03A, 8, FieldKind::Pic, "FORM OF PAYMENT TAX TOTAL AMOUNT"),
    fld("SPARE_TAR2", 0x042, 24, FieldKind::Spare, "SPARE BYTES"),
    fld("ND5FDFPI", 0x05A, 1, FieldKind::Bit, "FARE PRICING INDICATOR"),
    fld("ND5FDFTI", 0x05B, 2, FieldKind::Char, "FARE TYPE INDICATOR"),
    fld("SPARE_TAR3", 0x05D, 3, FieldKind::Spare, "SPARE BYTES"),
    fld("ND5FDTME", 0x060, 4, FieldKind::Char, "TIME OF ACTIVITY (HHMM)"),
    fld("ND5FDDTE", 0x064, 2, FieldKind::Date, "DATE OF ACTIVITY"),
    fld("ND5FDCIC", 0x066, 3, FieldKind::Char, "CITY CODE"),
    fld("SPARE_TAR4", 0x069, 2, FieldKind::Spare, "SPARES - CITY CODE EXPANSION"),
    fld("ND5FDOTN", 0x06B, 4, FieldKind::Char, "OFFICE TYPE / NAME CODE"),
    fld("SPARE_TAR5", 0x06F, 1, FieldKind::Spare, "SPARE BYTE"),
    fld("ND5FDANS", 0x070, 5, FieldKind::Char, "AGENT NUMERIC SINE"),
    fld("ND5FDAGI", 0x075, 2, FieldKind::Char, "AGENT ID"),
    fld("SPARE_TAR6", 0x077, 1, FieldKind::Spare, "SPARE BYTE"),
    fld("ND5FDASA", 0x078, 3, FieldKind::Bit, "SET ADDR OF TICKET CREATION"),
    fld("SPARE_TAR7", 0x07B, 1, FieldKind::Spare, "SPARE BYTE"),
    fld("ND5FDIAC", 0x07C, 2, FieldKind::Char, "ISSUING AIRLINE CODE"),
    fld("SPARE_TAR8", 0x07E, 1, FieldKind::Spare, "SPARE - AIRLINE CODE EXPANSION"),
    fld("ND5FDFPP", 0x07F, 1, FieldKind::Char, "PURPOSE OF FOP"),
    fld("ND5FDPTP", 0x080, 1, FieldKind::Char, "PASSENGER TYPE CODE (PTC)"),
    fld("SPARE_TAR9", 0x081, 7, FieldKind::Spare, "SPARE BYTES"),
    fld("ND5FDTDF", 0x088, 1, FieldKind::Char, "TICKET DATA ITEM AREA"),
];

/// ATR — Agent Transaction (ND5FDATR).
pub static ATR_FIELDS: &[FieldDescriptor] = &[
    fld("ND5FDWOU", 0x000, 2, FieldKind::Bin, "COUNT OF TRANSACTION ENTRIES"),
    fld("SPARE_ATR1", 0x002, 2, FieldKind::Spare, "SPARES"),
];

/// AIR — Additional Collection (ND5FDAIR).
pub static AIR_FIELDS: &[FieldDescriptor] = &[
    fld("ND5FDRTD", 0x000, 7, FieldKind::Char, "AGENT ID"),
    fld("SPARE_AIR1", 0x007, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDRTC", 0x008, 2, FieldKind::Bin, "COUNT OF TRANSACTION CODE ITEMS"),
];

/// IFR — In-Flight Sales (ND5FDIFR).
pub static IFR_FIELDS: &[FieldDescriptor] = &[
    fld("ND5FDCNT", 0x000, 2, FieldKind::Bin, "COUNT OF IN-FLIGHT SALES DATA ENTRIES"),
    fld("SPARE_IFR1", 0x002, 2, FieldKind::Spare, "SPARES"),
];

/// BOW — List Transaction Data (ND5FDBOW).
pub static BOW_FIELDS: &[FieldDescriptor] = &[
    fld("ND5FDDBD", 0x000, 7, FieldKind::Char, "CREATION DATE"),
    fld("ND5FDSSS", 0x007, 3, FieldKind::Char, "STATION CODE"),
    fld("ND5FDSLC", 0x00A, 4, FieldKind::Char, "LOCATION CODE"),
    fld("ND5FDPAD", 0x00E, 3, FieldKind::Bit, "PRINTER ADDRESS"),
    fld("ND5FDAII", 0x011, 8, FieldKind::Char, "VOID AGENT ID"),
    fld("SPARE_BOW1", 0x019, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDSID", 0x01A, 10, FieldKind::Char, "SECURITY ID"),
    fld("ND5FDBTA", 0x024, 4, FieldKind::Bit, "BTI FILE ADDRESS"),
];

/// COL — Collection Report (ND5FDCOL).
pub static COL_FIELDS: &[FieldDescriptor] = &[
    fld("ND5FDXFC", 0x000, 4, FieldKind::Char, "OFFICE CODE"),
    fld("ND5FDXTY", 0x004, 3, FieldKind::Char, "CITY CODE"),
    fld("SPARE_COL1", 0x007, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDXLN", 0x009, 1, FieldKind::Bit, "COLLECTION REPORT NUMBER"),
    fld("ND5FDXLD", 0x00A, 2, FieldKind::Date, "COLLECTION REPORT DATE"),
    fld("ND5FDXFD", 0x00C, 2, FieldKind::Date, "COLLECTION REPORT FROM DATE"),
    fld("ND5FDXAI", 0x00E, 7, FieldKind::Char, "SUMMARY AGENT ID"),
    fld("ND5FDXID", 0x015, 7, FieldKind::Char, "CLOSEOUT AGENT ID"),
    fld("ND5FDXOD", 0x01C, 2, FieldKind::Date, "CLOSEOUT DATE"),
    fld("ND5FDXON", 0x01E, 1, FieldKind::Bit, "CLOSEOUT NUMBER"),
    fld("ND5FDXI1", 0x01F, 1, FieldKind::Bit, "AGENT TRANSACTION INDICATOR"),
    fld("ND5FDRDF", 0x020, 1, FieldKind::Char, "COLLECTION REPORT DATA"),
    fld("SPARE_COL2", 0x021, 3, FieldKind::Spare, "SPARES"),
];

/// MIR — Miscellaneous Transaction Data (ND5FDMIR).
pub static MIR_FIELDS: &[FieldDescriptor] = &[
    fld("ND5FDVFC", 0x000, 4, FieldKind::Char, "OFFICE LOCATION"),
    fld("ND5FDVTY", 0x004, 3, FieldKind::Char, "CITY CODE"),
    fld("SPARE_MIR1", 0x007, 2, FieldKind::Spare, "SPARES - CITY CODE EXPANSION"),
    fld("ND5FDVID", 0x009, 7, FieldKind::Char, "CREATING AGENT ID"),
    fld("ND5FDVVD", 0x010, 2, FieldKind::Date, "ACTIVITY DATE"),
    fld("ND5FDVYM", 0x012, 2, FieldKind::Bin, "ACTIVITY TIME"),
    fld("ND5FDVOC", 0x014, 14, FieldKind::Char, "DOCUMENT NUMBER"),
    fld("ND5FDVOJ", 0x022, 2, FieldKind::Char, "CONJUNCTION TICKET NUMBER"),
    fld("ND5FDVCR", 0x024, 3, FieldKind::Char, "DOCUMENT CURRENCY CODE"),
    fld("ND5FDVCA", 0x027, 6, FieldKind::Char, "CREDIT CARD APPROVAL CODE"),
    fld("ND5FDVOP", 0x02D, 37, FieldKind::Char, "FORM OF PAYMENT TEXT"),
    fld("ND5FDVOU", 0x052, 2, FieldKind::Bin, "COUNT OF TRANSACTION CODE ITEMS"),
    fld("ND5FDVTC", 0x054, 2, FieldKind::Bin, "COUNT OF TAX TYPE ITEMS"),
    fld("ND5FDVCI", 0x056, 1, FieldKind::Char, "DOCUMENT DECIMAL INDICATOR"),
    fld("ND5FDCRD", 0x057, 1, FieldKind::Bit, "CREDIT CARD RESTRICTIONS"),
    fld("ND5FDVVM1", 0x058, 4, FieldKind::Bin, "TRANSACTION AMOUNT 1"),
    fld("ND5FDVYP1", 0x05C, 3, FieldKind::Char, "TRANSACTION CODE 1"),
    fld("ND5FDVPF1", 0x05F, 1, FieldKind::Char, "PASSENGER FACILITY CHARGE INDICATOR 1"),
    fld("SPARE_CTI1", 0x060, 4, FieldKind::Spare, "SPARE BYTES 1"),
    fld("ND5FDVVM2", 0x064, 4, FieldKind::Bin, "TRANSACTION AMOUNT 2"),
    fld("ND5FDVYP2", 0x068, 3, FieldKind::Char, "TRANSACTION CODE 2"),
    fld("ND5FDVPF2", 0x06B, 1, FieldKind::Char, "PASSENGER FACILITY CHARGE INDICATOR 2"),
    fld("SPARE_CTI2", 0x06C, 4, FieldKind::Spare, "SPARE BYTES 2"),
    fld("ND5FDVVM3", 0x070, 4, FieldKind::Bin, "TRANSACTION AMOUNT 3"),
    fld("ND5FDVYP3", 0x074, 3, FieldKind::Char, "TRANSACTION CODE 3"),
    fld("ND5FDVPF3", 0x077, 1, FieldKind::Char, "PASSENGER FACILITY CHARGE INDICATOR 3"),
    fld("SPARE_CTI3", 0x078, 4, FieldKind::Spare, "SPARE BYTES 3"),
    fld("ND5FDTTI", 0x07C, 24, FieldKind::Char, "TAX TYPE ITEMS (3x8)"),
    fld("ND5FDVAT", 0x094, 4, FieldKind::Bin, "TRANSACTION TOTAL AMOUNT"),
    fld("ND5FDVBS", 0x098, 4, FieldKind::Bin, "ADDITIONAL COLLECTION BASE AMOUNT"),
    fld("SPARE_MIR2", 0x09C, 2, FieldKind::Spare, "SPARE BYTES"),
    fld("ND5FDVNT", 0x09E, 2, FieldKind::Bin, "COUNT OF ADDITIONAL COLLECTION TAX ITEMS"),
    fld("ND5FDATE", 0x0A0, 24, FieldKind::Char, "ADDITIONAL COLLECTION TAX ITEMS (3x8)"),
    fld("ND5FDATA", 0x0B8, 4, FieldKind::Bin, "ADDITIONAL COLLECTION TOTAL AMOUNT"),
    fld("ND5FDVEP", 0x0BC, 2, FieldKind::Date, "DEPARTURE DATE"),
    fld("ND5FDVRG", 0x0BE, 3, FieldKind::Char, "ORIGIN STATION"),
    fld("SPARE_MIR3", 0x0C1, 2, FieldKind::Spare, "SPARES - STATION CODE EXPANSION"),
    fld("ND5FDACI", 0x0C3, 1, FieldKind::Char, "REPS ACCOUNTING SYSTEM CODE"),
    fld("ND5FDVTG", 0x0C4, 32, FieldKind::Char, "ROUTING DATA (4x8)"),
    fld("ND5FDVDN", 0x0E4, 14, FieldKind::Char, "EXCHANGED DOCUMENT NUMBER"),
    fld("ND5FDVDC", 0x0F2, 1, FieldKind::Bit, "EXCHANGED DOCUMENT INDICATOR"),
    fld("ND5FDXCG", 0x0F3, 4, FieldKind::Char, "EXCHANGED DOCUMENT INDICATOR DATA"),
    fld("ND5FDVKT", 0x0F7, 14, FieldKind::Char, "TICKET-BY-MAIL TICKET NUMBER"),
    fld("ND5FDVNR", 0x105, 2, FieldKind::Char, "TICKET-BY-MAIL NUMBER RANGE"),
    fld("ND5FDVAM", 0x107, 29, FieldKind::Char, "TICKET-BY-MAIL NAME PURCHASER"),
    fld("ND5FDQCT", 0x124, 4, FieldKind::Bin, "AMOUNT TENDERED"),
    fld("ND5FDQUR", 0x128, 3, FieldKind::Char, "CURRENCY CODE OF AMOUNT TENDERED"),
    fld("ND5FDQUS", 0x12B, 1, FieldKind::Char, "TENDERED CURRENCY DECIMAL INDICATOR"),
    fld("ND5FDQAM1", 0x12C, 4, FieldKind::Bin, "TRANSACTION AMOUNT 1"),
    fld("ND5FDQYP1", 0x130, 3, FieldKind::Char, "TRANSACTION CODE 1"),
    fld("SPARE_QT1", 0x133, 1, FieldKind::Spare, "SPARE BYTE 1"),
    fld("ND5FDQAM2", 0x134, 4, FieldKind::Bin, "TRANSACTION AMOUNT 2"),
    fld("ND5FDQYP2", 0x138, 3, FieldKind::Char, "TRANSACTION CODE 2"),
    fld("SPARE_QT2", 0x13B, 1, FieldKind::Spare, "SPARE BYTE 2"),
    fld("ND5FDQAM3", 0x13C, 4, FieldKind::Bin, "TRANSACTION AMOUNT 3"),
    fld("ND5FDQYP3", 0x140, 3, FieldKind::Char, "TRANSACTION CODE 3"),
    fld("SPARE_QT3", 0x143, 1, FieldKind::Spare, "SPARE BYTE 3"),
    fld("ND5FDQAX1", 0x144, 4, FieldKind::Bin, "TAX AMOUNT 1"),
    fld("ND5FDQCD1", 0x148, 2, FieldKind::Char, "TAX CODE 1"),
    fld("SPARE_QE1", 0x14A, 2, FieldKind::Spare, "SPARE BYTES 1"),
    fld("ND5FDQAX2", 0x14C, 4, FieldKind::Bin, "TAX AMOUNT 2"),
    fld("ND5FDQCD2", 0x150, 2, FieldKind::Char, "TAX CODE 2"),
    fld("SPARE_QE2", 0x152, 2, FieldKind::Spare, "SPARE BYTES 2"),
    fld("ND5FDQAX3", 0x154, 4, FieldKind::Bin, "TAX AMOUNT 3"),
    fld("ND5FDQCD3", 0x158, 2, FieldKind::Char, "TAX CODE 3"),
    fld("SPARE_QE3", 0x15A, 2, FieldKind::Spare, "SPARE BYTES 3"),
    fld("ND5FDQDC", 0x15C, 10, FieldKind::Char, "DOCUMENT CURRENCY EXCHANGE RATE"),
    fld("ND5FDVPC", 0x166, 2, FieldKind::Bin, "TOTAL PASSENGER COUNT FOR PFC'S"),
    fld("ND5FDCRT", 0x168, 3, FieldKind::Pic, "COMMISSION RATE FOR GSA TRANSACTIONS"),
    fld("ND5FDREP", 0x16B, 14, FieldKind::Char, "REPRINT DOCUMENT NUMBER"),
    fld("ND5FDCOM", 0x179, 11, FieldKind::Char, "COMMISSION AMOUNT"),
    fld("ND5FDCLT", 0x184, 2, FieldKind::Char, "REPS CARD LEVEL RESULTS"),
    fld("ND5FDFRE", 0x186, 10, FieldKind::Char, "FREQUENT FLYER NUMBER"),
    fld("ND5FDRAS", 0x190, 3, FieldKind::Bit, "AGENT SET ADDRESS"),
    fld("ND5FDMPS", 0x193, 1, FieldKind::Char, "REPS AUTHORIZATION CHARACTERISTICS INDICATOR"),
    fld("ND5FDMVC", 0x194, 4, FieldKind::Char, "REPS VALIDATION CODE"),
    fld("ND5FDMTR", 0x198, 9, FieldKind::Char, "REPS TRANSACTION ID/BANKNET REFERENCE NUMBER"),
    fld("ND5FDMST", 0x1A1, 2, FieldKind::Char, "REPS AUTHORIZATION RESPONSE/DOWNGRADE INDICATOR"),
    fld("ND5FDRAC", 0x1A3, 1, FieldKind::Char, "REPS AUTHORIZATION SOURCE CODE"),
    fld("ND5FDPOS", 0x1A4, 2, FieldKind::Char, "REPS POS ENTRY MODE"),
    fld("ND5FDBNT", 0x1A6, 2, FieldKind::Date, "REPS BANKNET REFERENCE DATE"),
    fld("ND5FDECI", 0x1A8, 2, FieldKind::Char, "REPS ELECTRONIC COMMERCE INDICATOR (ECI)"),
    fld("ND5FDCAV", 0x1AA, 1, FieldKind::Char, "REPS CARDHOLDER AUTHENTICATION VERIFICATION VALUE (CAVV)"),
    fld("ND5FDTIC", 0x1AB, 1, FieldKind::Char, "REPS CARDHOLDER ACTIVATION TERMINAL ID (CAT)"),
    fld("ND5FDQFD", 0x1AC, 48, FieldKind::Char, "ROUTING DATA (4x12)"),
    fld("ND5FDVOL", 0x1DC, 1, FieldKind::Char, "VOL/INVOL INDICATOR"),
    fld("ND5FDRSN", 0x1DD, 3, FieldKind::Char, "REASON CODE"),
    fld("ND5FDARD", 0x1E0, 15, FieldKind::Char, "REPS ACQUIRER REFERENCE DATA (ARD)"),
    fld("ND5FDPSD", 0x1EF, 12, FieldKind::Char, "REPS POINT OF SERVICE DATA (PSD)"),
    fld("ND5FDAVS", 0x1FB, 1, FieldKind::Char, "ADDRESS VERIFICATION INDICATOR"),
    fld("ND5FDRL4", 0x1FC, 4, FieldKind::Char, "REPS LAST FOUR DIGITS OF CREDIT CARD NUMBER"),
    fld("ND5FDRSD", 0x200, 1, FieldKind::Char, "REPS ACCOUNT STATUS DATA"),
    fld("SPARE_MIR4", 0x201, 9, FieldKind::Spare, "SPARES"),
    fld("ND5FDRTR", 0x20A, 11, FieldKind::Char, "REPS TOKEN REQUESTOR ID DATA"),
    fld("ND5FDRTL", 0x215, 2, FieldKind::Char, "REPS TOKEN ASSURE LEVEL DATA"),
    fld("ND5FDRSI", 0x217, 1, FieldKind::Char, "REPS SPEND QUALIFIED INDICATOR"),
    fld("ND5FDSP1", 0x218, 1, FieldKind::Char, "REPS SECURITY PROTOCOL"),
    fld("ND5FDTRC", 0x219, 2, FieldKind::Char, "REPS TRANSACTION INTEGRITY CLASS (TIC)"),
    fld("ND5FDPAN", 0x21B, 35, FieldKind::Char, "REPS PAYMENT ACCOUNT REFERENCE NUMBER"),
    fld("ND5FDADI", 0x23E, 1, FieldKind::Char, "REPS MARKET SPECIFIC AUTHORIZATION DATA INDICATOR"),
    fld("ND5FDSTA", 0x23F, 6, FieldKind::Char, "REPS SYSTEM TRACE AUDIT NUMBER (STAN)"),
    fld("ND5FDTDC", 0x245, 2, FieldKind::Char, "REPS TRANSACTION DATA CONDITION CODE"),
    fld("ND5FDPS2", 0x247, 13, FieldKind::Char, "REPS POS DATA"),
    fld("ND5FDPRC", 0x254, 6, FieldKind::Char, "REPS PROCESSING CODE"),
    fld("ND5FDCAN", 0x25A, 1, FieldKind::Char, "REPS CARDHOLDER AUTHENTICATION"),
    fld("ND5FDSCI", 0x25B, 1, FieldKind::Char, "REPS STORED CREDENTIAL INDICATOR"),
    fld("ND5FDAAV", 0x25C, 32, FieldKind::Char, "REPS ACCOUNTHOLDER AUTHENTICATION VALUE"),
    fld("ND5FDSTI", 0x27C, 36, FieldKind::Char, "REPS DIRECTORY SERVER TRANSACTION ID"),
    fld("ND5FDPPC", 0x2A0, 1, FieldKind::Char, "REPS PROGRAM PROTOCOL"),
    fld("ND5FDAAM", 0x2A1, 13, FieldKind::Char, "TAG=9F02 AUTHORIZED AMOUNT"),
    fld("ND5FDAIP", 0x2AE, 4, FieldKind::Char, "TAG=82 APPLICATION INTERCHANGE PROFILE"),
    fld("ND5FDARC", 0x2B2, 16, FieldKind::Char, "TAG=9F26 APPLICATION REQUEST CRYPTOGRAM"),
    fld("ND5FDATC", 0x2C2, 4, FieldKind::Char, "TAG=9F36 APPLICATION TRANSACTION COUNTER"),
    fld("ND5FDAUC", 0x2C6, 4, FieldKind::Char, "TAG=5F2A AUTHORIZATION CURRENCY CODE"),
    fld("ND5FDADT", 0x2CA, 6, FieldKind::Char, "TAG=9A AUTHORIZATION DATE"),
    fld("ND5FDCDT", 0x2D0, 2, FieldKind::Char, "TAG=9F27 CRYPTOGRAM INFORMATION DATA"),
    fld("ND5FDCTT", 0x2D2, 2, FieldKind::Char, "TAG=9C CRYPTOGRAM TRANSACTION TYPE"),
    fld("ND5FDCSN", 0x2D4, 3, FieldKind::Char, "TAG=5F34 CARD SEQUENCE NUMBER"),
    fld("ND5FDCVM", 0x2D7, 6, FieldKind::Char, "TAG=9F34 CARDHOLDER VERIFICATION METHOD"),
    fld("ND5FDCCC", 0x2DD, 1, FieldKind::Char, "CHIP CONDITION CODE"),
    fld("ND5FDDFN", 0x2DE, 32, FieldKind::Char, "TAG=84 DEDICATED FILE NAME"),
    fld("ND5FDDTC", 0x2FE, 2, FieldKind::Char, "DEVICE TYPE"),
    fld("ND5FDFFT", 0x300, 8, FieldKind::Char, "TAG=9F6E FORM FACTOR"),
    fld("ND5FDIFD", 0x308, 16, FieldKind::Char, "TAG=9F1E INTERFACE DEVICE (IFD) SERIAL NO"),
    fld("ND5FDIAD", 0x318, 64, FieldKind::Char, "TAG=9F10 ISSUER APPLICATION DATA (IAD)"),
    fld("ND5FDIRO", 0x358, 24, FieldKind::Char, "TAG=71 ISSUER SCRIPT RESULTS PART I"),
    fld("ND5FDIRT", 0x370, 18, FieldKind::Char, "TAG=72 ISSUER SCRIPT RESULTS PART II"),
    fld("ND5FDTKD", 0x382, 2, FieldKind::Char, "TAG=9F53 TRANSACTION CATEGORY CODE"),
    fld("ND5FDTSC", 0x384, 8, FieldKind::Char, "TAG=9F41 TRANSACTION SEQUENCE COUNTER"),
    fld("ND5FDTAV", 0x38C, 4, FieldKind::Char, "TAG=9F09 TERMINAL APPLICATION VERSION NO"),
    fld("ND5FDTCP", 0x390, 6, FieldKind::Char, "TAG=9F33 TERMINAL CAPABILITIES PROFILE"),
    fld("ND5FDTCO", 0x396, 4, FieldKind::Char, "TAG=9F1A TERMINAL COUNTRY CODE"),
    fld("ND5FDTTD", 0x39A, 6, FieldKind::Char, "TAG=9A TERMINAL TRANSMISSION DATE"),
    fld("ND5FDTTY", 0x3A0, 2, FieldKind::Char, "TAG=9F35 TERMINAL TYPE"),
    fld("ND5FDTVR", 0x3A2, 10, FieldKind::Char, "TAG=95 TERMINAL VERIFICATION RESULTS"),
    fld("ND5FDUNN", 0x3AC, 8, FieldKind::Char, "TAG=9F37 UNPREDICTABLE NUMBER"),
    fld("ND5FDMPE", 0x3B4, 32, FieldKind::Char, "PAYMENT REFERENCE ID"),
    fld("MIR_REMAINING", 0x3D4, 3018, FieldKind::Spare, "REMAINING MIR STRUCTURE DATA"),
];

/// MAR — Prepaid Accounting Data (ND5FDMAR).
pub static MAR_FIELDS: &[FieldDescriptor] = &[
    fld("SPARE_MAR1", 0x000, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMCI", 0x002, 3, FieldKind::Char, "TICKETING CITY"),
    fld("SPARE_MAR2", 0x005, 3, FieldKind::Spare, "SPARES"),
    fld("ND5FDMTG", 0x008, 2, FieldKind::Char, "TICKETING TELETYPE ADDRESS"),
    fld("ND5FDMAL", 0x00A, 2, FieldKind::Char, "TICKETING AIRLINE"),
    fld("SPARE_MAR3", 0x00C, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMNS1", 0x00E, 29, FieldKind::Char, "PASSENGER NAME 1"),
    fld("ND5FDMNS2", 0x02B, 29, FieldKind::Char, "PASSENGER NAME 2"),
    fld("SPARE_MAR4", 0x048, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMMN", 0x04A, 14, FieldKind::Char, "MCO NUMBER"),
    fld("ND5FDMDN", 0x058, 1, FieldKind::Char, "DUPE MCO NBR INDICATOR"),
    fld("SPARE_MAR5", 0x059, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMON", 0x05A, 14, FieldKind::Char, "OLD MCO NUMBER"),
    fld("SPARE_MAR6", 0x068, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMID", 0x06A, 7, FieldKind::Char, "ISSUE DATE"),
    fld("SPARE_MAR7", 0x071, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMCT", 0x072, 3, FieldKind::Char, "CITY"),
    fld("SPARE_MAR8", 0x075, 3, FieldKind::Spare, "SPARES"),
    fld("ND5FDMSI", 0x078, 2, FieldKind::Char, "SELLING TELETYPE ADDRESS"),
    fld("ND5FDMAA", 0x07A, 2, FieldKind::Char, "AIRLINE"),
    fld("SPARE_MAR9", 0x07C, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMOC", 0x07E, 4, FieldKind::Char, "OFFICE CODE"),
    fld("ND5FDMAG", 0x082, 5, FieldKind::Char, "AGENT NUMERIC SINE"),
    fld("ND5FDMAN", 0x087, 2, FieldKind::Char, "AGENT ID"),
    fld("SPARE_MAR10", 0x089, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMCY", 0x08A, 3, FieldKind::Char, "CITY CODE"),
    fld("SPARE_MAR11", 0x08D, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMOF", 0x08F, 4, FieldKind::Char, "OFFICE TYPE/NAME CODE"),
    fld("SPARE_MAR12", 0x093, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMDT", 0x094, 2, FieldKind::Date, "DATE (Local Binary Day NBR)"),
    fld("ND5FDMTM", 0x096, 4, FieldKind::Char, "TIME (Local)"),
    fld("ND5FDMAD", 0x09A, 6, FieldKind::Char, "AGENT SET ADDRESS"),
    fld("SPARE_MAR13", 0x0A0, 6, FieldKind::Spare, "SPARES"),
    fld("ND5FDMBC", 0x0A6, 3, FieldKind::Char, "BASE FARE CURRENCY CODE"),
    fld("SPARE_MAR14", 0x0A9, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMBI", 0x0AA, 1, FieldKind::Char, "BASE FARE DECIMAL INDICATOR"),
    fld("SPARE_MAR15", 0x0AB, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMBA", 0x0AC, 8, FieldKind::Pic, "BASE FARE AMOUNT"),
    fld("ND5FDMEC", 0x0B4, 3, FieldKind::Char, "EQUIVALENT FARE CURRENCY CODE"),
    fld("SPARE_MAR16", 0x0B7, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMEA", 0x0B8, 8, FieldKind::Pic, "EQUIVALENT FARE AMOUNT"),
    fld("SPARE_MAR17", 0x0C0, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMFC", 0x0C2, 2, FieldKind::Char, "FIRST TAX CODE"),
    fld("SPARE_MAR18", 0x0C4, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMFX", 0x0C6, 6, FieldKind::Pic, "FIRST TAX AMOUNT"),
    fld("SPARE_MAR19", 0x0CC, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMSC", 0x0CE, 2, FieldKind::Char, "SECOND TAX CODE"),
    fld("SPARE_MAR20", 0x0D0, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMSX", 0x0D2, 6, FieldKind::Pic, "SECOND TAX AMOUNT"),
    fld("SPARE_MAR21", 0x0D8, 2, FieldKind::Spare, "SPARES"),
    fld("SPARE_MAR22", 0x0DA, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMTE", 0x0DC, 2, FieldKind::Char, "THIRD TAX CODE"),
    fld("SPARE_MAR23", 0x0DE, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMTX", 0x0E0, 6, FieldKind::Pic, "THIRD TAX AMOUNT"),
    fld("SPARE_MAR24", 0x0E6, 14, FieldKind::Spare, "SPARES"),
    fld("ND5FDMCC", 0x0F4, 3, FieldKind::Char, "TICKET TOTAL CURRENCY CODE"),
    fld("SPARE_MAR25", 0x0F7, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMTO", 0x0F8, 8, FieldKind::Pic, "TICKET TOTAL"),
    fld("SPARE_MAR26", 0x100, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMMC", 0x102, 3, FieldKind::Char, "MISCELLANEOUS TOTAL CURRENCY CODE"),
    fld("SPARE_MAR27", 0x105, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMMA", 0x106, 8, FieldKind::Pic, "MISCELLANEOUS TOTAL"),
    fld("SPARE_MAR28", 0x10E, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMPC", 0x110, 3, FieldKind::Char, "PTA TOTAL CURRENCY CODE"),
    fld("SPARE_MAR29", 0x113, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMPI", 0x114, 1, FieldKind::Char, "PTA Total Decimal Indicator"),
    fld("SPARE_MAR30", 0x115, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMPA", 0x116, 8, FieldKind::Pic, "PTA TOTAL"),
    fld("ND5FDMSO", 0x11E, 3, FieldKind::Char, "Service Charge CURRENCY CODE"),
    fld("SPARE_MAR31", 0x121, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMSA", 0x122, 6, FieldKind::Pic, "Service Charge Amount"),
    fld("SPARE_MAR32", 0x128, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMPN", 0x12A, 29, FieldKind::Char, "PURCHASER NAME"),
    fld("SPARE_MAR33", 0x147, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMPR", 0x148, 175, FieldKind::Char, "PURCHASER ADDRESS"),
    fld("SPARE_MAR34", 0x1F7, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMPP", 0x1F8, 80, FieldKind::Char, "PURCHASER PHONE"),
    fld("ND5FDMCP", 0x248, 29, FieldKind::Char, "CARD PRESENTED BY NAME"),
    fld("SPARE_MAR35", 0x265, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMIA", 0x266, 8, FieldKind::Char, "IATA NUMBER"),
    fld("SPARE_MAR36", 0x26E, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMIN", 0x270, 1, FieldKind::Char, "COMMISSION TYPE INDICATOR"),
    fld("SPARE_MAR37", 0x271, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMCN", 0x272, 11, FieldKind::Pic, "COMMISSION RATE OR AMOUNT"),
    fld("SPARE_MAR38", 0x27D, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMFO", 0x27E, 58, FieldKind::Char, "FORM OF PAYMENT"),
    fld("ND5FDMCA", 0x2B8, 6, FieldKind::Char, "CREDIT CARD APPROVAL CODE"),
    fld("SPARE_MAR39", 0x2BE, 4, FieldKind::Spare, "SPARES"),
    fld("ND5FDMRC", 0x2C2, 3, FieldKind::Char, "TOTAL RESIDUAL VALUE CURRENCY CODE"),
    fld("SPARE_MAR40", 0x2C5, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMRA", 0x2C6, 8, FieldKind::Pic, "TOTAL RESIDUAL VALUE AMOUNT"),
    fld("SPARE_MAR41", 0x2CE, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMRI", 0x2D0, 57, FieldKind::Char, "REMARKS INFORMATION"),
    fld("ND5FDMRT", 0x309, 57, FieldKind::Char, "ROUTING INFORMATION"),
    fld("ND5FDMFD", 0x342, 2, FieldKind::Date, "FLIGHT DATE"),
    fld("ND5FDMCD", 0x344, 2, FieldKind::Char, "AIRLINE CODE"),
    fld("SPARE_MAR42", 0x346, 2, FieldKind::Spare, "SPARES"),
    fld("ND5FDMBO", 0x348, 3, FieldKind::Char, "BOARDING CITY"),
    fld("SPARE_MAR43", 0x34B, 3, FieldKind::Spare, "SPARES"),
    fld("ND5FDMFN", 0x34E, 2, FieldKind::Bit, "FLIGHT NUMBER"),
    fld("ND5FDMBR", 0x350, 15, FieldKind::Pic, "BANKERS BUYING RATE"),
    fld("SPARE_MAR44", 0x35F, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMCR", 0x360, 1, FieldKind::Char, "NEWLY CREATED PTA"),
    fld("SPARE_MAR45", 0x361, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMCM", 0x362, 1, FieldKind::Char, "UPDATE TO CHANGE MCO NBR"),
    fld("SPARE_MAR46", 0x363, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMUS", 0x364, 1, FieldKind::Char, "UPDATE AND PNR SPLIT"),
    fld("SPARE_MAR47", 0x365, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMUP", 0x366, 1, FieldKind::Char, "UPDATE AND PNR NOT SPLIT"),
    fld("SPARE_MAR48", 0x367, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMSP", 0x368, 1, FieldKind::Char, "PTA NOT UPDATED BUT PNR SPLIT"),
    fld("SPARE_MAR49", 0x369, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMDR", 0x36A, 1, FieldKind::Char, "DELTA SOLD PTA CREDIT CARD REFUND"),
    fld("SPARE_MAR50", 0x36B, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMRD", 0x36C, 1, FieldKind::Char, "OTHER REFUND"),
    fld("SPARE_MAR51", 0x36D, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMMS", 0x36E, 1, FieldKind::Char, "MISCELLANEOUS FUNDS USED"),
    fld("SPARE_MAR52", 0x36F, 1, FieldKind::Spare, "SPARE"),
    fld("ND5FDMDI", 0x370, 1, FieldKind::Char, "START OF PREPAID DATA ITEMS"),
];

/// VOI — Void Transaction (ND5FDVOI).
pub static VOI_FIELDS: &[FieldDescriptor] = &[
    fld("ND5FDVNB", 0x000, 14, FieldKind::Char, "DOCUMENT NUMBER"),
    fld("ND5FDVCJ", 0x00E, 2, FieldKind::Char, "CONJUNCTION NUMBER"),
    fld("ND5FDVCD", 0x010, 2, FieldKind::Date, "CREATION DATE (PARS BINARY DAY NBR)"),
    fld("ND5FDVAG", 0x012, 7, FieldKind::Char, "CREATING AGENT ID"),
    fld("ND5FDVVA", 0x019, 7, FieldKind::Char, "VOID AGENT ID"),
    fld("ND5FDVSL", 0x020, 7, FieldKind::Char, "SALES LOCATION"),
    fld("ND5FDVOT", 0x027, 1, FieldKind::Char, "VOID TYPE"),
    fld("ND5FDORT", 0x028, 1, FieldKind::Char, "ORIGINAL REFUND TYPE"),
    fld("SPARE_VOI", 0x029, 9, FieldKind::Spare, "SPARES"),
];

/// REF — Refund (ND5FDREF).
pub static REF_FIELDS: &[FieldDescriptor] = &[
    fld("ND5FDREC", 0x000, 14, FieldKind::Char, "REFUND RECEIPT NUMBER"),
    fld("ND5FDCCA", 0x00E, 21, FieldKind::Char, "TYPE OF PAYMENT"),
    fld("ND5FDPCN", 0x023, 29, FieldKind::Char, "PASSENGER NAME"),
    fld("ND5FDRCR", 0x040, 3, FieldKind::Char, "CURRENCY CODE"),
    fld("ND5FDINV", 0x043, 1, FieldKind::Char, "INVOLUNTARY INDICATOR"),
    fld("ND5FDORG", 0x044, 3, FieldKind::Char, "ORIGIN CITY CODE"),
    fld("ND5FDDES", 0x047, 3, FieldKind::Char, "DESTINATION CITY CODE"),
    fld("ND5FDTRA", 0x04A, 8, FieldKind::Char, "TRAVEL AGY IDENTIFIER-IATA"),
    fld("ND5FDAGY", 0x052, 5, FieldKind::Char, "AGENCY COMMISSION"),
    fld("ND5FDISS", 0x057, 3, FieldKind::Char, "ISSUING CARRIER"),
    fld("ND5FDFAA", 0x05A, 8, FieldKind::Char, "FARE AMOUNT"),
    fld("ND5FDTC1", 0x062, 3, FieldKind::Char, "1ST MISC TRANSACTION CODE"),
    fld("ND5FDTC2", 0x065, 3, FieldKind::Char, "2ND MISC TRANSACTION CODE"),
    fld("ND5FDTC3", 0x068, 3, FieldKind::Char, "3RD MISC TRANSACTION CODE"),
    fld("ND5FDTA1", 0x06B, 8, FieldKind::Char, "1ST MISC TRANSACTION AMOUNT"),
    fld("ND5FDTA2", 0x073, 8, FieldKind::Char, "2ND MISC TRANSACTION AMOUNT"),
    fld("ND5FDTA3", 0x07B, 8, FieldKind::Char, "3RD MISC TRANSACTION AMOUNT"),
    fld("ND5FDKN1", 0x0B0, 14, FieldKind::Char, "1ST REFUNDED TICKET NUMBER"),
    fld("ND5FDKN2", 0x0BE, 14, FieldKind::Char, "2ND REFUNDED TICKET NUMBER"),
    fld("ND5FDKN3", 0x0CC, 14, FieldKind::Char, "3RD REFUNDED TICKET NUMBER"),
    fld("ND5FDKN4", 0x0DA, 14, FieldKind::Char, "4TH REFUNDED TICKET NUMBER"),
    fld("ND5FDKN5", 0x0E8, 14, FieldKind::Char, "5TH REFUNDED TICKET NUMBER"),
    fld("ND5FDCN1", 0x0F6, 4, FieldKind::Char, "1ST REFUNDED TICKET COUPON"),
    fld("ND5FDCN2", 0x0FA, 4, FieldKind::Char, "2ND REFUNDED TICKET COUPON"),
    fld("ND5FDCN3", 0x0FE, 4, FieldKind::Char, "3RD REFUNDED TICKET COUPON"),
    fld("ND5FDCN4", 0x102, 4, FieldKind::Char, "4TH REFUNDED TICKET COUPON"),
    fld("ND5FDCN5", 0x106, 4, FieldKind::Char, "5TH REFUNDED TICKET COUPON"),
    fld("ND5FDPNG", 0x10A, 3, FieldKind::Char, "PENALTY CHARGE CODE - PEN"),
    fld("ND5FDNT2", 0x10D, 7, FieldKind::Char, "PENALTY CHARGE AMOUNT"),
    fld("ND5FDTRT", 0x114, 8, FieldKind::Char, "TOTAL REFUNDED AMOUNT"),
    fld("ND5FDSTM", 0x11C, 7, FieldKind::Char, "SYSTEM DATE"),
    fld("ND5FDELC", 0x123, 7, FieldKind::Char, "SALES LOCATION"),
    fld("ND5FDATD", 0x12A, 7, FieldKind::Char, "AGENT ID"),
    fld("ND5FDCOD", 0x131, 3, FieldKind::Char, "ADMIN SERVICE CHG CODE - ASC"),
    fld("ND5FDCOS", 0x134, 7, FieldKind::Char, "ADMIN SERVICE CHG AMT"),
    fld("ND5FDOTC", 0x1E0, 3, FieldKind::Char, "OTHER MISC CHARGES CODE"),
    fld("ND5FDOTA", 0x1E3, 7, FieldKind::Char, "OTHER MISC CHARGES AMOUNT"),
    fld("ND5FDPRI", 0x1EA, 1, FieldKind::Char, "PROCESSING INDICATOR"),
    fld("ND5FDPNM", 0x290, 38, FieldKind::Char, "PAYEE NAME"),
    fld("ND5FDAD1", 0x2B6, 30, FieldKind::Char, "PAYEE ADDRESS 1"),
    fld("ND5FDAD2", 0x2D4, 30, FieldKind::Char, "PAYEE ADDRESS 2"),
    fld("ND5FDCTY", 0x2F2, 15, FieldKind::Char, "CITY"),
    fld("ND5FDSUB", 0x301, 2, FieldKind::Char, "SUBCOUNTRY"),
    fld("ND5FDCTR", 0x303, 3, FieldKind::Char, "COUNTRY"),
    fld("ND5FDZIP", 0x306, 9, FieldKind::Char, "ZIP CODE"),
    fld("ND5FDREA", 0x30F, 1, FieldKind::Char, "REASON FOR REFUND"),
    fld("ND5FDDTI", 0x310, 2, FieldKind::Date, "ORIGINAL DATE TKT ISSUED"),
    fld("ND5FDCKN", 0x312, 15, FieldKind::Char, "REFUND CHECK NUMBER"),
    fld("ND5FDDCI", 0x321, 2, FieldKind::Date, "DATE REFUND CHECK ISSUED"),
    fld("ND5FDFFN", 0x323, 10, FieldKind::Char, "FREQUENT FLYER NUMBER"),
    fld("ND5FDFTN", 0x32D, 4, FieldKind::Char, "FLIGHT NUMBER"),
    fld("ND5FDFDT", 0x331, 2, FieldKind::Date, "FLIGHT DATE"),
    fld("ND5FDDNR", 0x333, 14, FieldKind::Char, "REPRINT DOCUMENT NUMBER"),
    fld("ND5FDREI", 0x341, 1, FieldKind::Char, "REFUND/EXCHANGE INDICATOR"),
    fld("ND5FDPEI", 0x342, 1, FieldKind::Char, "PAPER/ELECTRONIC INDICATOR"),
    fld("ND5FDNTN", 0x343, 13, FieldKind::Char, "NEW TICKET NUMBER"),
    fld("ND5FDAMT", 0x350, 11, FieldKind::Char, "REFUND AMOUNT COMPUTED"),
    fld("ND5FDRMK", 0x35B, 55, FieldKind::Char, "REMARKS FROM TEMPLATE"),
    fld("ND5FDRM2", 0x392, 30, FieldKind::Char, "SECOND LINE OF REMARKS"),
    fld("ND5FDRRD", 0x3B0, 7, FieldKind::Char, "REFUND REQUEST DATE"),
    fld("ND5FDARF", 0x3B7, 1, FieldKind::Bit, "CREDIT CARD RESTRICTIONS"),
    fld("SPARE_REF1", 0x3B8, 8, FieldKind::Spare, "SPARES"),
    fld("ND5FD99C1", 0x3C0, 2, FieldKind::Char, "TAX CODE 1"),
    fld("SPARE_TX1", 0x3C2, 3, FieldKind::Spare, "SPARES 1"),
    fld("ND5FD99T1", 0x3C5, 11, FieldKind::Char, "TAX AMOUNT 1"),
    fld("ND5FD99C2", 0x3D0, 2, FieldKind::Char, "TAX CODE 2"),
    fld("SPARE_TX2", 0x3D2, 3, FieldKind::Spare, "SPARES 2"),
    fld("ND5FD99T2", 0x3D5, 11, FieldKind::Char, "TAX AMOUNT 2"),
    fld("ND5FD99C3", 0x3E0, 2, FieldKind::Char, "TAX CODE 3"),
    fld("SPARE_TX3", 0x3E2, 3, FieldKind::Spare, "SPARES 3"),
    fld("ND5FD99T3", 0x3E5, 11, FieldKind::Char, "TAX AMOUNT 3"),
    fld("ND5FD99C4", 0x3F0, 2, FieldKind::Char, "TAX CODE 4"),
    fld("SPARE_TX4", 0x3F2, 3, FieldKind::Spare, "SPARES 4"),
    fld("ND5FD99T4", 0x3F5, 11, FieldKind::Char, "TAX AMOUNT 4"),
    fld("ND5FD99C5", 0x400, 2, FieldKind::Char, "TAX CODE 5"),
    fld("SPARE_TX5", 0x402, 3, FieldKind::Spare, "SPARES 5"),
    fld("ND5FD99T5", 0x405, 11, FieldKind::Char, "TAX AMOUNT 5"),
    fld("ND5FDTXS_REMAINING", 0x410, 1504, FieldKind::Char, "REMAINING REFUND TAXES (94x16)"),
    fld("ND5FDOBT1", 0x9F0, 2, FieldKind::Char, "FEE CODE 1"),
    fld("ND5FDOBS1", 0x9F2, 3, FieldKind::Char, "FEE SUBCODE 1"),
    fld("ND5FDOBT2", 0x9F5, 2, FieldKind::Char, "FEE CODE 2"),
    fld("ND5FDOBS2", 0x9F7, 3, FieldKind::Char, "FEE SUBCODE 2"),
    fld("ND5FDOBT3", 0x9FA, 2, FieldKind::Char, "FEE CODE 3"),
    fld("ND5FDOBS3", 0x9FC, 3, FieldKind::Char, "FEE SUBCODE 3"),
    fld("ND5FDOBA_REMAINING", 0x9FF, 480, FieldKind::Char, "REMAINING TAX SURCHARGE DATA (96x5)"),
    fld("ND5FDRPE", 0xBDF, 32, FieldKind::Char, "PAYMENT REFERENCE ID"),
];
